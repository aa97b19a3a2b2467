//! # Code Playground Route Handlers
//!
//! Snippet storage, share links, and the simulated code runner. Execution is
//! simulated on purpose: user code is never run by this server.

use crate::{auth::middleware::AuthenticatedUser, errors::AppError, state::AppState};
use apex::{
    ids,
    types::{CodeSnippet, SharedSnippet},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{Duration, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration as StdDuration;

/// How long a share link stays valid.
const SHARE_TTL_DAYS: i64 = 7;

#[derive(Deserialize)]
pub struct ExecuteCodeRequest {
    pub code: Option<String>,
    pub language: Option<String>,
}

/// `POST /api/code/execute-code`
///
/// Returns a canned per-language transcript after a short delay, simulating a
/// sandboxed runner.
pub async fn execute_code_handler(
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<ExecuteCodeRequest>,
) -> Result<Json<Value>, AppError> {
    let (Some(_code), Some(language)) = (payload.code, payload.language) else {
        return Err(AppError::BadRequest(
            "Code and language are required".to_string(),
        ));
    };

    tokio::time::sleep(StdDuration::from_secs(1)).await;

    let output = match language.to_lowercase().as_str() {
        "javascript" => {
            "JavaScript output:\nConsole.log output would appear here.\nCode executed successfully!"
                .to_string()
        }
        "python" => {
            "Python output:\n>>> print(\"Hello, World!\")\nHello, World!\n>>> x = 10\n>>> print(x * 2)\n20"
                .to_string()
        }
        "java" => {
            "Java output:\nCompiling Java code...\nCompiled successfully!\nHello, World!"
                .to_string()
        }
        other => format!(
            "Execution for {other} is simulated in this demo.\nIn a production environment, code would be executed in a secure sandbox."
        ),
    };

    Ok(Json(json!({ "output": output })))
}

#[derive(Deserialize)]
pub struct SaveSnippetRequest {
    pub code: Option<String>,
    pub language: Option<String>,
    pub title: Option<String>,
}

/// `POST /api/code`
pub async fn save_snippet_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(payload): Json<SaveSnippetRequest>,
) -> Result<(StatusCode, Json<CodeSnippet>), AppError> {
    let (Some(code), Some(language)) = (payload.code, payload.language) else {
        return Err(AppError::BadRequest(
            "Code and language are required".to_string(),
        ));
    };

    let now = Utc::now();
    let snippet = CodeSnippet {
        id: ids::record_id(),
        user_id: claims.user_id,
        title: payload
            .title
            .unwrap_or_else(|| format!("{language} Snippet {}", now.format("%Y-%m-%d"))),
        code,
        language,
        created_at: now,
        updated_at: now,
    };

    state
        .repos
        .code_snippets
        .mutate(|snippets| snippets.push(snippet.clone()))
        .await;

    Ok((StatusCode::CREATED, Json(snippet)))
}

/// `GET /api/code`
pub async fn list_snippets_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> Json<Vec<CodeSnippet>> {
    let snippets = state
        .repos
        .code_snippets
        .read(|snippets| {
            snippets
                .iter()
                .filter(|s| s.user_id == claims.user_id)
                .cloned()
                .collect()
        })
        .await;
    Json(snippets)
}

#[derive(Deserialize)]
pub struct ShareCodeRequest {
    pub code: Option<String>,
    pub language: Option<String>,
}

/// `POST /api/code/shared`
pub async fn share_code_handler(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(payload): Json<ShareCodeRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (Some(code), Some(language)) = (payload.code, payload.language) else {
        return Err(AppError::BadRequest(
            "Code and language are required".to_string(),
        ));
    };

    let now = Utc::now();
    let shared = SharedSnippet {
        id: ids::record_id(),
        user_id: claims.user_id,
        code,
        language,
        created_at: now,
        expires_at: now + Duration::days(SHARE_TTL_DAYS),
    };
    let id = shared.id.clone();

    state
        .repos
        .shared_snippets
        .mutate(|snippets| snippets.push(shared))
        .await;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// `GET /api/code/shared/{id}`
///
/// Public: share links work without a token. Expired links report the same
/// status as missing ones.
pub async fn get_shared_code_handler(
    State(state): State<AppState>,
    Path(shared_id): Path<String>,
) -> Result<Json<SharedSnippet>, AppError> {
    let shared = state
        .repos
        .shared_snippets
        .read(|snippets| snippets.iter().find(|s| s.id == shared_id).cloned())
        .await
        .ok_or_else(|| AppError::NotFound("Shared code not found".to_string()))?;

    if shared.expires_at < Utc::now() {
        return Err(AppError::NotFound("Shared code has expired".to_string()));
    }

    Ok(Json(shared))
}
