//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port with a temporary data
//! directory and the Gemini provider pointed at an `httpmock` server, so the
//! integration tests exercise the full HTTP surface end to end.

#![allow(unused)]

use apex_server::auth::middleware::Claims;
use apex_server::config::{AiConfig, AppConfig, GenericTemplateConfig};
use apex_server::router::create_router;
use apex_server::state::{build_app_state, AppState};
use httpmock::MockServer;
use jsonwebtoken::{encode, EncodingKey, Header};
use reqwest::Client;
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const TEST_JWT_SECRET: &str = "test-secret";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub data_dir: PathBuf,
    pub app_state: AppState,
    _data_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server with the Gemini provider pointed at the mock server.
    pub async fn spawn() -> anyhow::Result<Self> {
        Self::spawn_with_ai(true).await
    }

    /// Spawns the server with no AI key, so the resolver goes straight to
    /// the fallback library.
    pub async fn spawn_without_ai() -> anyhow::Result<Self> {
        Self::spawn_with_ai(false).await
    }

    async fn spawn_with_ai(ai_enabled: bool) -> anyhow::Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();
        let data_dir = TempDir::new()?;
        let data_path = data_dir.path().to_path_buf();

        let config = AppConfig {
            port: 0,
            data_dir: data_path.to_str().unwrap().to_string(),
            cors_origin: "*".to_string(),
            jwt_secret: TEST_JWT_SECRET.to_string(),
            ai: AiConfig {
                api_key: ai_enabled.then(|| "test-key".to_string()),
                api_url_base: mock_server.url("/v1beta/models"),
                models: vec![
                    "gemini-1.5-flash".to_string(),
                    "gemini-1.5-pro".to_string(),
                    "gemini-pro".to_string(),
                ],
            },
            generic_template: GenericTemplateConfig::default(),
        };

        let app_state = build_app_state(config).await?;
        let app_state_for_harness = app_state.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = format!("http://{}", listener.local_addr()?);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = create_router(app_state);
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            data_dir: data_path,
            app_state: app_state_for_harness,
            _data_dir: data_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Registers a user and returns `(token, user_id)`.
    pub async fn register(&self, name: &str, email: &str) -> anyhow::Result<(String, String)> {
        let response = self
            .client
            .post(format!("{}/api/auth/register", self.address))
            .json(&json!({ "name": name, "email": email, "password": "hunter2!" }))
            .send()
            .await?
            .error_for_status()?;
        let body: Value = response.json().await?;
        let token = body["token"].as_str().unwrap_or_default().to_string();
        let user_id = body["user"]["id"].as_str().unwrap_or_default().to_string();
        Ok((token, user_id))
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Signs a JWT with the test secret and an arbitrary expiry offset (negative
/// for an already-expired token).
pub fn generate_jwt_with_expiry(
    user_id: &str,
    email: &str,
    expires_in_secs: i64,
) -> anyhow::Result<String> {
    let exp = (chrono::Utc::now().timestamp() + expires_in_secs).max(0) as usize;
    let claims = Claims {
        user_id: user_id.to_string(),
        email: email.to_string(),
        exp,
    };
    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_ref()),
    )?)
}

/// A module body long enough and structured enough to pass the
/// generic-template judgment.
pub fn rich_module_content() -> String {
    let mut content = String::from(
        "Raster displays cannot draw continuous primitives directly, so every shape is \
         converted to pixels by an incremental algorithm.\n\n- integer arithmetic only\n- one \
         decision per pixel\n",
    );
    while content.len() < 600 {
        content.push_str(
            "The decision variable tracks the accumulated deviation from the ideal shape and \
             picks the closer pixel at every step. ",
        );
    }
    content
}

/// A course document in the shape the Gemini prompt asks for, substantial
/// enough to be accepted by the quality judgment.
pub fn rich_course_json(title: &str) -> Value {
    json!({
        "title": title,
        "description": "A detailed course covering the subject end to end, including the \
                        theory behind each technique, worked examples on realistic inputs, and \
                        the tradeoffs practitioners weigh when applying it in production.",
        "duration": "25 minutes",
        "difficulty": "Intermediate",
        "modules": [
            { "title": "Foundations", "detailedContent": rich_module_content() },
            { "title": "Applications", "detailedContent": rich_module_content() }
        ]
    })
}

/// Wraps a course document in the Gemini response envelope.
pub fn gemini_envelope(course: &Value) -> Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": format!("```json\n{course}\n```") }]
            }
        }]
    })
}
