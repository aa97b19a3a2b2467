//! # Learning Path Route Handlers
//!
//! Owner-filtered CRUD over learning paths.

use crate::{auth::middleware::AuthenticatedUser, errors::AppError, state::AppState};
use apex::{ids, types::LearningPath};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

/// `GET /api/learning-paths`
pub async fn learning_paths_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> Json<Vec<LearningPath>> {
    let paths = state
        .repos
        .learning_paths
        .read(|paths| {
            paths
                .iter()
                .filter(|p| p.user_id == claims.user_id)
                .cloned()
                .collect()
        })
        .await;
    Json(paths)
}

#[derive(Deserialize)]
pub struct CreateLearningPathRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub courses: Option<Vec<String>>,
    pub difficulty: Option<String>,
}

/// `POST /api/learning-paths`
pub async fn create_learning_path_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(payload): Json<CreateLearningPathRequest>,
) -> Result<(StatusCode, Json<LearningPath>), AppError> {
    let (Some(name), Some(courses)) = (payload.name, payload.courses) else {
        return Err(AppError::BadRequest(
            "Invalid learning path data".to_string(),
        ));
    };

    let now = Utc::now();
    let path = LearningPath {
        id: ids::record_id(),
        user_id: claims.user_id,
        description: payload
            .description
            .unwrap_or_else(|| format!("Learning path for {name}")),
        name,
        courses,
        current_course_index: 0,
        difficulty: payload
            .difficulty
            .unwrap_or_else(|| "intermediate".to_string()),
        adaptive_difficulty: true,
        progress: 0,
        created_at: now,
        updated_at: now,
    };

    state
        .repos
        .learning_paths
        .mutate(|paths| paths.push(path.clone()))
        .await;

    Ok((StatusCode::CREATED, Json(path)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLearningPathRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub courses: Option<Vec<String>>,
    pub current_course_index: Option<usize>,
    pub difficulty: Option<String>,
    pub adaptive_difficulty: Option<bool>,
    pub progress: Option<u8>,
}

/// `PUT /api/learning-paths/{id}`
pub async fn update_learning_path_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(path_id): Path<String>,
    Json(payload): Json<UpdateLearningPathRequest>,
) -> Result<Json<LearningPath>, AppError> {
    state
        .repos
        .learning_paths
        .mutate(|paths| {
            let path = paths
                .iter_mut()
                .find(|p| p.user_id == claims.user_id && p.id == path_id)?;
            if let Some(name) = payload.name {
                path.name = name;
            }
            if let Some(description) = payload.description {
                path.description = description;
            }
            if let Some(courses) = payload.courses {
                path.courses = courses;
            }
            if let Some(index) = payload.current_course_index {
                path.current_course_index = index;
            }
            if let Some(difficulty) = payload.difficulty {
                path.difficulty = difficulty;
            }
            if let Some(adaptive) = payload.adaptive_difficulty {
                path.adaptive_difficulty = adaptive;
            }
            if let Some(progress) = payload.progress {
                path.progress = progress.min(100);
            }
            path.updated_at = Utc::now();
            Some(path.clone())
        })
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Learning path not found".to_string()))
}

/// `DELETE /api/learning-paths/{id}`
pub async fn delete_learning_path_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(path_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let removed = state
        .repos
        .learning_paths
        .mutate(|paths| {
            let index = paths
                .iter()
                .position(|p| p.user_id == claims.user_id && p.id == path_id)?;
            paths.remove(index);
            Some(())
        })
        .await;

    match removed {
        Some(()) => Ok(Json(
            json!({ "message": "Learning path deleted successfully" }),
        )),
        None => Err(AppError::NotFound("Learning path not found".to_string())),
    }
}
