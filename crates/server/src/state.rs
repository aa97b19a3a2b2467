//! # Application State
//!
//! The shared state built at startup: the loaded configuration, the
//! repositories over the JSON collections (with the one-time migration pass),
//! and the course resolver with one Gemini provider per configured model.

use crate::config::AppConfig;
use apex::{
    providers::ai::{gemini::GeminiProvider, AiProvider},
    CourseResolver, JsonStore, Repositories,
};
use std::sync::Arc;
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repos: Arc<Repositories>,
    pub resolver: Arc<CourseResolver>,
}

/// Builds the shared application state from the configuration.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let store = JsonStore::new(&config.data_dir);
    info!(data_dir = %config.data_dir, "opening JSON record store");
    let repos = Repositories::open(store);

    let mut providers: Vec<Box<dyn AiProvider>> = Vec::new();
    if let Some(api_key) = &config.ai.api_key {
        for model in &config.ai.models {
            let api_url = format!("{}/{model}:generateContent", config.ai.api_url_base);
            providers.push(Box::new(GeminiProvider::new(
                model.clone(),
                api_url,
                api_key.clone(),
            )?));
        }
        info!(models = config.ai.models.len(), "Gemini AI initialized");
    } else {
        info!("Gemini API key not configured, serving fallback content only");
    }

    let resolver = CourseResolver::new(providers, config.generic_template.thresholds());

    Ok(AppState {
        config: Arc::new(config),
        repos: Arc::new(repos),
        resolver: Arc::new(resolver),
    })
}
