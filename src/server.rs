//! HTTP server initialization and runtime setup.
//!
//! Builds the storage backend, wires application state, and drives the Axum
//! server lifecycle including graceful shutdown.

use crate::config::Config;
use crate::infrastructure::persistence::build_repository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - the configured storage backend (with schema bootstrap for SQL backends)
/// - application services and shared state
/// - the Axum HTTP server with Ctrl+C shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Storage backend initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    tracing::info!(backend = config.backend.as_str(), "Storage ready");

    let state = AppState::new(repository, config.base_url.clone(), config.alloc_budget());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when Ctrl+C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown handler: {e}");
        return;
    }

    tracing::info!("Shutdown signal received");
}
