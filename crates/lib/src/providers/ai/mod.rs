pub mod gemini;

use crate::errors::ApexError;
use async_trait::async_trait;
use std::fmt::Debug;

/// A trait for interacting with a generative-AI provider.
///
/// One instance corresponds to one model endpoint; the resolver holds a list
/// of them and tries each in order until one succeeds.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug {
    /// A short identifier for logging (e.g. the model name).
    fn name(&self) -> &str;

    /// Generates a text completion for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, ApexError>;
}
