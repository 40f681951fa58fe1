//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AnalysisService, AuthService, FeedbackService};
use crate::domain::query::AdmissionTable;
use crate::infrastructure::persistence::{CsvCredentialRepository, CsvFeedbackRepository};

/// Handles to the services, cheap to clone per request.
///
/// The admissions table inside [`AnalysisService`] is built once at startup
/// and only ever read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
    pub auth_service: Arc<AuthService<CsvCredentialRepository>>,
    pub feedback_service: Arc<FeedbackService<CsvFeedbackRepository>>,
}

impl AppState {
    pub fn new(
        analysis_service: Arc<AnalysisService>,
        auth_service: Arc<AuthService<CsvCredentialRepository>>,
        feedback_service: Arc<FeedbackService<CsvFeedbackRepository>>,
    ) -> Self {
        Self {
            analysis_service,
            auth_service,
            feedback_service,
        }
    }

    /// Wires the services over a loaded table and the two flat-file stores.
    pub fn from_parts(
        table: AdmissionTable,
        credentials: CsvCredentialRepository,
        feedback: CsvFeedbackRepository,
    ) -> Self {
        Self::new(
            Arc::new(AnalysisService::new(Arc::new(table))),
            Arc::new(AuthService::new(Arc::new(credentials))),
            Arc::new(FeedbackService::new(Arc::new(feedback))),
        )
    }
}
