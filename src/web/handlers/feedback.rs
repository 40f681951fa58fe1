//! Feedback form submission.

use axum::{
    extract::{Form, State},
    response::Redirect,
};

use crate::state::AppState;
use crate::web::forms::FeedbackForm;

/// Stores a feedback entry and returns to the home page.
///
/// # Endpoint
///
/// `POST /submit_feedback`
///
/// The redirect happens whether or not the entry could be written; a failed
/// write is logged at `error` level.
pub async fn submit_feedback_handler(
    State(state): State<AppState>,
    Form(form): Form<FeedbackForm>,
) -> Redirect {
    if let Err(e) = state
        .feedback_service
        .submit(&form.seat, &form.feedback)
        .await
    {
        tracing::error!(error = %e, "feedback was not stored");
    }

    Redirect::to("/home")
}
