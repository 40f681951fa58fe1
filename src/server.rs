//! HTTP server initialization and runtime setup.
//!
//! Loads the dataset, prepares the flat-file stores and runs the Axum server
//! until Ctrl+C.

use crate::config::Config;
use crate::infrastructure::persistence::{
    CsvCredentialRepository, CsvFeedbackRepository, load_admissions,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Builds the application state from the configured files.
///
/// # Errors
///
/// Returns an error if:
/// - The dataset cannot be opened or a row cannot be parsed
/// - The credential file cannot be created
pub fn build_state(config: &Config) -> Result<AppState> {
    let table = load_admissions(&config.dataset_path).with_context(|| {
        format!(
            "Failed to load dataset from {}",
            config.dataset_path.display()
        )
    })?;
    tracing::info!(rows = table.len(), "Dataset loaded");

    let credentials = CsvCredentialRepository::new(&config.credentials_path);
    credentials.ensure_exists().with_context(|| {
        format!(
            "Failed to prepare credential store at {}",
            config.credentials_path.display()
        )
    })?;

    let feedback = CsvFeedbackRepository::new(&config.feedback_path);

    Ok(AppState::from_parts(table, credentials, feedback))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The dataset or credential store cannot be prepared
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let router = app_router(state, &config.static_dir);
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
