//! Business logic services for the application layer.

pub mod analysis_service;
pub mod auth_service;
pub mod feedback_service;

pub use analysis_service::{AnalysisService, ChartQuery};
pub use auth_service::{AuthService, LoginOutcome, RegistrationOutcome};
pub use feedback_service::FeedbackService;
