//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `/`, `/register`, `/home`, `/analysis`, `/prediction`, `/feedback` - HTML pages
//! - `POST /submit_feedback`, `POST /display_graph` - form handlers
//! - `GET /get_options`, `POST /make_prediction`, `GET /health` - JSON endpoints
//! - `/static/*` - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling (applied in [`crate::server`])

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .merge(api::routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}
