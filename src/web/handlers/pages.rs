//! Static navigation pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
struct HomeTemplate {}

/// Template for the analysis page.
///
/// Renders `templates/analysis.html`: the chart form, plus `error` when the
/// previous chart request could not be answered.
#[derive(Template, WebTemplate)]
#[template(path = "analysis.html")]
pub(super) struct AnalysisTemplate {
    pub(super) error: String,
}

impl AnalysisTemplate {
    pub(super) fn with_error(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Prediction page; the form is driven by `/get_options` and
/// `/make_prediction` from the browser.
#[derive(Template, WebTemplate)]
#[template(path = "prediction.html")]
struct PredictionTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "feedback.html")]
struct FeedbackTemplate {}

/// `GET /home`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {}
}

/// `GET /analysis`
pub async fn analysis_handler() -> impl IntoResponse {
    AnalysisTemplate::with_error(String::new())
}

/// `GET /prediction`
pub async fn prediction_handler() -> impl IntoResponse {
    PredictionTemplate {}
}

/// `GET /feedback`
pub async fn feedback_page_handler() -> impl IntoResponse {
    FeedbackTemplate {}
}
