//! Chart rendering for the analysis form.

use axum::{
    extract::{Form, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::Validate;

use super::pages::AnalysisTemplate;
use crate::error::AppError;
use crate::rendering::render_png;
use crate::state::AppState;
use crate::web::forms::GraphForm;

const RENDER_FAILED: &str = "The chart could not be rendered. Please try again.";

/// Renders the requested chart as a PNG image.
///
/// # Endpoint
///
/// `POST /display_graph`
///
/// # Request Body
///
/// Form fields `college`, `course`, `category`, `gender`. A `category` of
/// `none` produces the per-category box plot, anything else the year trend.
///
/// # Responses
///
/// - `200 OK` with `Content-Type: image/png`
/// - `400 Bad Request` analysis page when college or course is missing
/// - `404 Not Found` analysis page with the not-found or empty-result message
/// - `500 Internal Server Error` analysis page when rendering fails
pub async fn display_graph_handler(
    State(state): State<AppState>,
    Form(form): Form<GraphForm>,
) -> Response {
    if let Err(errors) = form.validate() {
        tracing::debug!(errors = %errors, "rejected chart request");
        return (
            StatusCode::BAD_REQUEST,
            AnalysisTemplate::with_error("Please select a college and a course."),
        )
            .into_response();
    }

    let chart = match state.analysis_service.chart(&form.to_query()) {
        Ok(chart) => chart,
        Err(e) => {
            tracing::info!(college = %form.college, error = %e, "chart request without data");
            let message = e.to_string();
            let status = AppError::from(e).status();
            return (status, AnalysisTemplate::with_error(message)).into_response();
        }
    };

    match tokio::task::spawn_blocking(move || render_png(&chart)).await {
        Ok(Ok(png)) => ([(header::CONTENT_TYPE, "image/png")], png).into_response(),
        Ok(Err(e)) => render_failed(e.to_string()),
        Err(e) => render_failed(e.to_string()),
    }
}

fn render_failed(reason: String) -> Response {
    let error = AppError::internal(RENDER_FAILED, json!({ "reason": reason }));
    tracing::error!(details = %error.to_error_info().details, "chart rendering failed");

    (error.status(), AnalysisTemplate::with_error(error.to_string())).into_response()
}
