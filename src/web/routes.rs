//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    analysis_handler, display_graph_handler, feedback_page_handler, home_handler,
    login_page_handler, login_submit_handler, prediction_handler, register_page_handler,
    register_submit_handler, submit_feedback_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// HTML page routes.
///
/// # Endpoints
///
/// - `GET /`, `POST /` - Login page and credential check
/// - `GET /register`, `POST /register` - Registration page and account creation
/// - `GET /home` - Navigation hub
/// - `GET /analysis` - Chart form
/// - `GET /prediction` - Prediction form
/// - `GET /feedback` - Feedback form
/// - `POST /submit_feedback` - Store feedback, back to `/home`
/// - `POST /display_graph` - PNG chart for the analysis form
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(login_page_handler).post(login_submit_handler))
        .route(
            "/register",
            get(register_page_handler).post(register_submit_handler),
        )
        .route("/home", get(home_handler))
        .route("/analysis", get(analysis_handler))
        .route("/prediction", get(prediction_handler))
        .route("/feedback", get(feedback_page_handler))
        .route("/submit_feedback", post(submit_feedback_handler))
        .route("/display_graph", post(display_graph_handler))
}
