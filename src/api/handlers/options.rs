//! Handler for the dropdown options endpoint.

use axum::{Json, extract::State};

use crate::api::dto::options::OptionsResponse;
use crate::state::AppState;

/// Returns the distinct colleges, courses, categories and genders in the dataset.
///
/// # Endpoint
///
/// `GET /get_options`
///
/// # Response
///
/// ```json
/// {
///   "colleges": ["IIT Delhi", "IIT Bombay"],
///   "courses": ["Computer Science"],
///   "categories": ["GEN", "OBC-NCL"],
///   "genders": ["Gender-Neutral", "Female-only"]
/// }
/// ```
///
/// Values keep their dataset spelling and first-appearance order.
pub async fn get_options_handler(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(state.analysis_service.options().into())
}
