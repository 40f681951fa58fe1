//! Handler for the seat prediction endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::prediction::{PredictionRequest, PredictionResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Predicts whether a rank is likely to get a seat.
///
/// # Endpoint
///
/// `POST /make_prediction`
///
/// # Request Body
///
/// ```json
/// {
///   "college": "IIT Delhi",
///   "course": "Computer Science",
///   "category": "GEN",
///   "gender": "Gender-Neutral",
///   "rank": "150"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "prediction": "You will most likely get a seat.",
///   "outcome": "will_likely_get_seat"
/// }
/// ```
///
/// The verdict compares the rank with the mean closing rank of all rows
/// matching the four attributes (case-insensitive). A missing combination
/// answers "No data found for the selected options." with status 200.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a prediction request (missing
/// field, negative or fractional numeric rank), a field is empty, or the rank
/// is not a whole number.
pub async fn make_prediction_handler(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let query = payload.to_query().ok_or_else(|| {
        AppError::bad_request("Rank must be a non-negative whole number", json!({}))
    })?;

    let prediction = state.analysis_service.predict(&query);

    Ok(Json(prediction.into()))
}
