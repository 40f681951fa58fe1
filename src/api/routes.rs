//! JSON endpoint route configuration.

use crate::api::handlers::{get_options_handler, health_handler, make_prediction_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON routes used by the prediction page and by monitoring.
///
/// # Endpoints
///
/// - `GET  /get_options`     - Distinct values for the dropdowns
/// - `POST /make_prediction` - Seat prediction for one combination
/// - `GET  /health`          - Dataset and store checks
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/get_options", get(get_options_handler))
        .route("/make_prediction", post(make_prediction_handler))
        .route("/health", get(health_handler))
}
