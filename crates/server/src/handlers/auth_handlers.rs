//! # Authentication Route Handlers
//!
//! Registration, login, and the current-user profile. Passwords are stored
//! as bcrypt hashes; successful register/login responses carry a fresh JWT.

use crate::{
    auth::middleware::{issue_token, AuthenticatedUser},
    errors::AppError,
    state::AppState,
};
use apex::{ids, types::User, types::UserCourse};
use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The bcrypt work factor, matching the hashes already on disk.
const BCRYPT_COST: u32 = 10;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// The public view of a user, without the password hash.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub courses_completed: u32,
    pub total_study_time: u32,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            courses_completed: user.courses_completed,
            total_study_time: user.total_study_time,
        }
    }
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserSummary,
}

/// `POST /api/auth/register`
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let (Some(name), Some(email), Some(password)) = (
        payload.name.filter(|s| !s.trim().is_empty()),
        payload.email.filter(|s| !s.trim().is_empty()),
        payload.password.filter(|s| !s.is_empty()),
    ) else {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    };

    let password_hash = bcrypt::hash(&password, BCRYPT_COST)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("password hashing failed: {e}")))?;

    let user = User {
        id: ids::timestamp_id(),
        name,
        email: email.clone(),
        password: password_hash,
        created_at: Utc::now(),
        courses_completed: 0,
        total_study_time: 0,
        favorite_topics: Vec::new(),
    };

    // The uniqueness check and the insert happen under the same collection
    // lock, so two concurrent registrations cannot both pass the check.
    let inserted = state
        .repos
        .users
        .mutate(|users| {
            if users.iter().any(|u| u.email == user.email) {
                false
            } else {
                users.push(user.clone());
                true
            }
        })
        .await;

    if !inserted {
        return Err(AppError::BadRequest("User already exists".to_string()));
    }

    info!(email, "user registered");
    let token = issue_token(&user.id, &user.email, &state.config.jwt_secret)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("token signing failed: {e}")))?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            token,
            user: UserSummary::from(&user),
        }),
    ))
}

/// `POST /api/auth/login`
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    };

    let user = state
        .repos
        .users
        .read(|users| users.iter().find(|u| u.email == email).cloned())
        .await
        .ok_or_else(|| AppError::BadRequest("Invalid credentials".to_string()))?;

    let valid = bcrypt::verify(&password, &user.password)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("password verification failed: {e}")))?;
    if !valid {
        return Err(AppError::BadRequest("Invalid credentials".to_string()));
    }

    let token = issue_token(&user.id, &user.email, &state.config.jwt_secret)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("token signing failed: {e}")))?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: UserSummary::from(&user),
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub courses_completed: u32,
    pub total_study_time: u32,
    pub total_courses: usize,
    pub recent_activity: Vec<UserCourse>,
}

/// `GET /api/auth/me`
pub async fn me_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> Result<Json<MeResponse>, AppError> {
    let user = state
        .repos
        .users
        .read(|users| users.iter().find(|u| u.id == claims.user_id).cloned())
        .await
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let owned = state
        .repos
        .user_courses
        .read(|courses| {
            courses
                .iter()
                .filter(|c| c.user_id == user.id)
                .cloned()
                .collect::<Vec<_>>()
        })
        .await;

    let recent_activity: Vec<UserCourse> = owned.iter().rev().take(5).cloned().collect();

    Ok(Json(MeResponse {
        id: user.id.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        courses_completed: user.courses_completed,
        total_study_time: user.total_study_time,
        total_courses: owned.len(),
        recent_activity,
    }))
}
