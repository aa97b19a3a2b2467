//! # Course Content Resolver
//!
//! Decides between live AI generation and static fallback content for a
//! topic. The collaborator is tried once per configured model, first success
//! wins; an unusable or generic response falls through to the fallback
//! library. Callers always receive a course document — collaborator failure
//! is never surfaced as an error.

use crate::classifier;
use crate::errors::ApexError;
use crate::fallback::{self, GenericTemplateThresholds};
use crate::knowledge::{self, ContextMatch};
use crate::prompts;
use crate::providers::ai::AiProvider;
use crate::types::CourseDocument;
use chrono::Utc;
use tracing::{info, warn};

/// Fallback `ragContext` label when nothing in the knowledge base matched.
const GENERAL_CONTEXT: &str = "general engineering";

pub struct CourseResolver {
    providers: Vec<Box<dyn AiProvider>>,
    thresholds: GenericTemplateThresholds,
}

impl CourseResolver {
    pub fn new(
        providers: Vec<Box<dyn AiProvider>>,
        thresholds: GenericTemplateThresholds,
    ) -> Self {
        Self {
            providers,
            thresholds,
        }
    }

    /// Whether an AI collaborator is configured at all.
    pub fn has_ai(&self) -> bool {
        !self.providers.is_empty()
    }

    /// The admission filter run by handlers before calling [`resolve`].
    ///
    /// [`resolve`]: CourseResolver::resolve
    pub fn is_educational(&self, topic: &str) -> bool {
        classifier::is_educational_query(topic)
    }

    /// Resolves a topic to a course document, via the AI collaborator when
    /// possible and the fallback library otherwise.
    pub async fn resolve(&self, topic: &str) -> CourseDocument {
        let context = knowledge::find_relevant_context(topic);
        let rag_context = Self::rag_labels(&context);
        info!(topic, context = ?rag_context, "resolving course content");

        if let Some(mut course) = self.try_ai(topic, &context).await {
            course.topic = Some(topic.to_string());
            course.generated_at = Some(Utc::now());
            course.is_ai_generated = Some(true);
            course.rag_context = rag_context;
            return course;
        }

        let mut course = fallback::detailed_course(topic);
        course.topic = Some(topic.to_string());
        course.generated_at = Some(Utc::now());
        course.is_ai_generated = Some(false);
        course.is_fallback = Some(true);
        course.fallback_used = Some(true);
        course.rag_context = rag_context;
        course
    }

    /// Tries each configured model in order; the first successful response is
    /// parsed and quality-judged. A response that fails to parse or is judged
    /// generic is not retried against the remaining models — the original
    /// request either produced usable content or it didn't.
    async fn try_ai(&self, topic: &str, context: &[ContextMatch]) -> Option<CourseDocument> {
        if self.providers.is_empty() {
            return None;
        }
        let prompt = prompts::build_course_prompt(topic, context);

        for provider in &self.providers {
            let raw = match provider.generate(&prompt).await {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(model = provider.name(), "AI request failed: {e}");
                    continue;
                }
            };
            info!(
                model = provider.name(),
                length = raw.len(),
                "AI response received"
            );

            match Self::parse_course(&raw) {
                Ok(course) => {
                    if fallback::is_generic_template(&course, &self.thresholds) {
                        warn!(
                            model = provider.name(),
                            title = %course.title,
                            "AI returned a generic template, using fallback content"
                        );
                        return None;
                    }
                    return Some(course);
                }
                Err(e) => {
                    warn!(model = provider.name(), "unusable AI response: {e}");
                    return None;
                }
            }
        }

        warn!("all AI models failed, using fallback content");
        None
    }

    /// Strips code-fence markers and parses the response as a course
    /// document. A document without a body unit is rejected.
    fn parse_course(raw: &str) -> Result<CourseDocument, ApexError> {
        let cleaned = raw.replace("```json", "").replace("```", "");
        let cleaned = cleaned.trim();
        let course: CourseDocument = serde_json::from_str(cleaned)
            .map_err(|e| ApexError::CourseParse(format!("invalid JSON: {e}")))?;
        if course.title.trim().is_empty() {
            return Err(ApexError::CourseParse("missing title".to_string()));
        }
        if course.body.is_empty() {
            return Err(ApexError::CourseParse(
                "no modules or sections".to_string(),
            ));
        }
        Ok(course)
    }

    fn rag_labels(context: &[ContextMatch]) -> Vec<String> {
        if context.is_empty() {
            vec![GENERAL_CONTEXT.to_string()]
        } else {
            context.iter().map(|m| m.label().to_string()).collect()
        }
    }
}
