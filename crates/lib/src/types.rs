//! # Shared Data Types
//!
//! The record types persisted by the [`crate::store`] module and the course
//! document shapes produced by the resolver. All wire and on-disk field names
//! are camelCase to stay compatible with the stored JSON collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user. The `password` field holds the bcrypt hash, never the
/// plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub courses_completed: u32,
    /// Accumulated study time, in minutes.
    #[serde(default)]
    pub total_study_time: u32,
    #[serde(default)]
    pub favorite_topics: Vec<String>,
}

/// An external learning resource attached to a course module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One module of an AI-shaped course document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_exercise: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub common_mistakes: Vec<String>,
}

/// One section of a library-authored course document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSection {
    pub title: String,
    pub content: String,
}

/// The body of a course document.
///
/// Generated documents come in two shapes: the AI collaborator is prompted for
/// a flat `modules` array, while the static library authors `sections`. The
/// historical data used optional-field duck typing for this; modeling it as an
/// untagged enum keeps the wire format identical while letting handlers and
/// the resolver match exhaustively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseBody {
    Sectioned { sections: Vec<CourseSection> },
    Modular { modules: Vec<CourseModule> },
}

impl CourseBody {
    pub fn is_empty(&self) -> bool {
        match self {
            CourseBody::Sectioned { sections } => sections.is_empty(),
            CourseBody::Modular { modules } => modules.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CourseBody::Sectioned { sections } => sections.len(),
            CourseBody::Modular { modules } => modules.len(),
        }
    }

    /// The main prose of each unit, in order. Sections expose their `content`,
    /// modules their `detailedContent`.
    pub fn unit_texts(&self) -> Vec<&str> {
        match self {
            CourseBody::Sectioned { sections } => {
                sections.iter().map(|s| s.content.as_str()).collect()
            }
            CourseBody::Modular { modules } => modules
                .iter()
                .map(|m| m.detailed_content.as_deref().unwrap_or_default())
                .collect(),
        }
    }
}

/// A full course document, either AI-generated or authored by the fallback
/// library. Appended to the Courses collection for history and embedded in
/// each [`UserCourse`] as an independent copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_read_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration_minutes: Option<u32>,
    #[serde(flatten)]
    pub body: CourseBody,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub learning_objectives: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub real_world_applications: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quick_reference: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assessment_questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub study_next: Vec<String>,
    /// The raw topic the user asked for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_ai_generated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fallback: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_used: Option<bool>,
    /// The knowledge-base domains/concepts that matched the topic.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rag_context: Vec<String>,
}

/// A per-user enrollment and progress record wrapping a generated course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCourse {
    pub id: String,
    pub user_id: String,
    pub topic: String,
    pub course: CourseDocument,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed_at: Option<DateTime<Utc>>,
    /// Percent complete, 0-100.
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub liked: bool,
}

/// A user-curated sequence of courses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub courses: Vec<String>,
    #[serde(default)]
    pub current_course_index: usize,
    pub difficulty: String,
    #[serde(default)]
    pub adaptive_difficulty: bool,
    #[serde(default)]
    pub progress: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One multiple-choice question of a skill assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i32,
}

/// The learning-style profile derived from assessment interaction data, as
/// percentages summing to roughly 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStyle {
    pub visual: u8,
    pub textual: u8,
    pub interactive: u8,
    pub current: String,
}

impl Default for LearningStyle {
    fn default() -> Self {
        Self {
            visual: 33,
            textual: 33,
            interactive: 34,
            current: "balanced".to_string(),
        }
    }
}

/// A skill assessment: created on generate, mutated once on submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAssessment {
    pub id: String,
    pub user_id: String,
    pub topic: String,
    pub questions: Vec<AssessmentQuestion>,
    #[serde(default)]
    pub user_answers: Vec<i32>,
    #[serde(default)]
    pub skill_gaps: Vec<String>,
    #[serde(default)]
    pub recommended_courses: Vec<String>,
    #[serde(default)]
    pub learning_style: LearningStyle,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A saved playground snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub code: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A snippet published under a shareable link. Expires 7 days after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedSnippet {
    pub id: String,
    pub user_id: String,
    pub code: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
