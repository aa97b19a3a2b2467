//! # Skill Assessment Route Handlers
//!
//! Assessment generation and submission. Questions are templated per topic;
//! submission derives skill gaps from the incorrect answers and a learning
//! style from the interaction data.

use crate::{auth::middleware::AuthenticatedUser, errors::AppError, state::AppState};
use apex::{
    ids,
    types::{AssessmentQuestion, LearningStyle, SkillAssessment},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `GET /api/skill-assessments`
pub async fn skill_assessments_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> Json<Vec<SkillAssessment>> {
    let assessments = state
        .repos
        .skill_assessments
        .read(|assessments| {
            assessments
                .iter()
                .filter(|a| a.user_id == claims.user_id)
                .cloned()
                .collect()
        })
        .await;
    Json(assessments)
}

#[derive(Deserialize)]
pub struct GenerateAssessmentRequest {
    pub topic: Option<String>,
}

fn sample_questions(topic: &str) -> Vec<AssessmentQuestion> {
    let question = |question: String, options: [&str; 4], correct_answer: i32| {
        AssessmentQuestion {
            question,
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer,
        }
    };
    vec![
        question(
            format!("What is a key concept in {topic}?"),
            [
                "Sample answer A",
                "Sample answer B",
                "Sample answer C",
                "Sample answer D",
            ],
            1,
        ),
        question(
            format!("Which of the following is true about {topic}?"),
            [
                "Sample statement A",
                "Sample statement B",
                "Sample statement C",
                "Sample statement D",
            ],
            2,
        ),
        question(
            format!("How would you implement a {topic} solution?"),
            [
                "Implementation approach A",
                "Implementation approach B",
                "Implementation approach C",
                "Implementation approach D",
            ],
            0,
        ),
        question(
            format!("What is a common challenge when working with {topic}?"),
            ["Challenge A", "Challenge B", "Challenge C", "Challenge D"],
            3,
        ),
        question(
            format!("Which tool is best for working with {topic}?"),
            ["Tool A", "Tool B", "Tool C", "Tool D"],
            1,
        ),
    ]
}

/// `POST /api/skill-assessments/generate`
pub async fn generate_assessment_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(payload): Json<GenerateAssessmentRequest>,
) -> Result<(StatusCode, Json<SkillAssessment>), AppError> {
    let topic = payload
        .topic
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("Topic is required".to_string()))?;

    let now = Utc::now();
    let assessment = SkillAssessment {
        id: ids::record_id(),
        user_id: claims.user_id,
        questions: sample_questions(&topic),
        topic,
        user_answers: Vec::new(),
        skill_gaps: Vec::new(),
        recommended_courses: Vec::new(),
        learning_style: LearningStyle::default(),
        created_at: now,
        updated_at: now,
    };

    state
        .repos
        .skill_assessments
        .mutate(|assessments| assessments.push(assessment.clone()))
        .await;

    Ok((StatusCode::CREATED, Json(assessment)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionData {
    #[serde(default)]
    pub time_spent_on_text: u32,
    #[serde(default)]
    pub time_spent_on_visuals: u32,
    #[serde(default)]
    pub interactive_elements_used: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentRequest {
    pub answers: Option<Vec<i32>>,
    pub interaction_data: Option<InteractionData>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentPerformance {
    pub correct_answers: usize,
    pub total_questions: usize,
    pub percentage: u32,
}

#[derive(Serialize)]
pub struct SubmitAssessmentResponse {
    pub assessment: SkillAssessment,
    pub performance: AssessmentPerformance,
}

/// Pulls a subtopic out of a templated question for the skill-gap list.
fn extract_subtopic(question: &str, topic: &str) -> String {
    let about_re = Regex::new(r"(?i)about (.+?)[.?]").expect("static pattern");
    let in_re = Regex::new(r"(?i)in (.+?)[.?]").expect("static pattern");
    about_re
        .captures(question)
        .or_else(|| in_re.captures(question))
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| format!("general {topic}"))
}

fn derive_learning_style(data: &InteractionData) -> Option<LearningStyle> {
    let total = data.time_spent_on_text + data.time_spent_on_visuals + data.interactive_elements_used;
    if total == 0 {
        return None;
    }
    let percent = |part: u32| (part as f64 / total as f64 * 100.0).round() as u8;
    let mut style = LearningStyle {
        textual: percent(data.time_spent_on_text),
        visual: percent(data.time_spent_on_visuals),
        interactive: percent(data.interactive_elements_used),
        current: "balanced".to_string(),
    };
    let dominant = [
        ("textual", style.textual),
        ("visual", style.visual),
        ("interactive", style.interactive),
    ]
    .into_iter()
    .max_by_key(|(_, value)| *value)
    .map(|(name, _)| name.to_string())
    .unwrap_or_else(|| "balanced".to_string());
    style.current = dominant;
    Some(style)
}

/// `POST /api/skill-assessments/{id}/submit`
pub async fn submit_assessment_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(assessment_id): Path<String>,
    Json(payload): Json<SubmitAssessmentRequest>,
) -> Result<Json<SubmitAssessmentResponse>, AppError> {
    let Some(answers) = payload.answers else {
        return Err(AppError::BadRequest("Invalid answers format".to_string()));
    };

    let updated = state
        .repos
        .skill_assessments
        .mutate(|assessments| {
            let assessment = assessments
                .iter_mut()
                .find(|a| a.user_id == claims.user_id && a.id == assessment_id)?;

            assessment.user_answers = answers.clone();

            let mut skill_gaps: Vec<String> = Vec::new();
            let mut correct_count = 0;
            for (index, question) in assessment.questions.iter().enumerate() {
                if answers.get(index).copied() == Some(question.correct_answer) {
                    correct_count += 1;
                } else {
                    let subtopic = extract_subtopic(&question.question, &assessment.topic);
                    if !skill_gaps.contains(&subtopic) {
                        skill_gaps.push(subtopic);
                    }
                }
            }
            assessment.skill_gaps = skill_gaps;

            if let Some(data) = &payload.interaction_data {
                if let Some(style) = derive_learning_style(data) {
                    assessment.learning_style = style;
                }
            }

            assessment.recommended_courses = vec![
                format!("{} Fundamentals", assessment.topic),
                format!("Advanced {}", assessment.topic),
                format!("Practical {} Implementation", assessment.topic),
            ];
            assessment.updated_at = Utc::now();

            Some((assessment.clone(), correct_count))
        })
        .await;

    let Some((assessment, correct_answers)) = updated else {
        return Err(AppError::NotFound("Assessment not found".to_string()));
    };

    let total_questions = assessment.questions.len();
    let percentage = if total_questions == 0 {
        0
    } else {
        (correct_answers as f64 / total_questions as f64 * 100.0).round() as u32
    };

    Ok(Json(SubmitAssessmentResponse {
        assessment,
        performance: AssessmentPerformance {
            correct_answers,
            total_questions,
            percentage,
        },
    }))
}
