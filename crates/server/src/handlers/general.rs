//! # General Route Handlers
//!
//! Root, health, and status endpoints. Informational only.

use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

/// The handler for the root (`/`) endpoint.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Apex API Server",
        "version": "1.0.0",
    }))
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Apex server is running",
        "timestamp": Utc::now().to_rfc3339(),
        "gemini": {
            "configured": state.config.gemini_configured(),
            "initialized": state.resolver.has_ai(),
        },
    }))
}

/// The handler for the `/api` info endpoint.
pub async fn api_info() -> Json<Value> {
    Json(json!({
        "message": "Apex API Server",
        "version": "1.0.0",
        "endpoints": ["/health", "/api/auth", "/api/courses", "/api/generate-course"],
    }))
}

/// The handler for the `/api/ping` liveness endpoint.
pub async fn ping() -> Json<Value> {
    Json(json!({
        "message": "pong",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// The handler for the `/api/status` endpoint.
pub async fn status(State(state): State<AppState>) -> Json<Value> {
    let configured = state.config.gemini_configured();
    Json(json!({
        "server": "running",
        "gemini": {
            "configured": configured,
            "status": if configured { "ready" } else { "needs_api_key" },
            "message": if configured {
                "Gemini AI is configured and ready"
            } else {
                "Please add your Gemini API key to the environment"
            },
        },
        "endpoints": {
            "courses": "/api/courses",
            "generateCourse": "/api/generate-course",
            "ping": "/api/ping",
        },
    }))
}
