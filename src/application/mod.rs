//! Application layer services implementing business logic.
//!
//! Services consume repository traits and the shared admissions table and
//! provide a small API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::analysis_service::AnalysisService`] - Options, predictions and chart assembly
//! - [`services::auth_service::AuthService`] - Login verification and registration
//! - [`services::feedback_service::FeedbackService`] - Feedback submission

pub mod services;
