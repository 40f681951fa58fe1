//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Dataset**: Row count of the table loaded at startup
/// 2. **Credential store**: File is present and readable
/// 3. **Feedback store**: File or its directory is present
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "dataset": { "status": "ok", "message": "1523 rows loaded" },
///     "credential_store": { "status": "ok", "message": "Readable" },
///     "feedback_store": { "status": "ok", "message": "Writable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let dataset = check_dataset(&state);

    let credential_store = if state.auth_service.health_check().await {
        CheckStatus::ok("Readable")
    } else {
        CheckStatus::error("Credential store is missing or unreadable")
    };

    let feedback_store = if state.feedback_service.health_check().await {
        CheckStatus::ok("Writable")
    } else {
        CheckStatus::error("Feedback store location is not writable")
    };

    let all_healthy = dataset.is_ok() && credential_store.is_ok() && feedback_store.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            dataset,
            credential_store,
            feedback_store,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports the size of the admissions table.
fn check_dataset(state: &AppState) -> CheckStatus {
    match state.analysis_service.row_count() {
        0 => CheckStatus::error("Dataset is empty"),
        rows => CheckStatus::ok(format!("{rows} rows loaded")),
    }
}
