//! # Apex Server
//!
//! The HTTP surface of the Apex learning platform: configuration, shared
//! state, JWT auth, and the REST API over the `apex` core library.

pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod router;
pub mod state;

use crate::config::AppConfig;
use tracing::info;

/// Builds the state and serves the API on the given listener.
pub async fn run(listener: tokio::net::TcpListener, config: AppConfig) -> anyhow::Result<()> {
    let app_state = state::build_app_state(config).await?;
    let app = router::create_router(app_state);

    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
