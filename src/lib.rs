//! # Cutoff Predictor
//!
//! Admission cutoff explorer built with Axum: browse a dataset of college
//! closing ranks, predict admission chances, chart historical trends and
//! collect feedback.
//!
//! ## Architecture
//!
//! The crate keeps a clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Records, the query/filter engine, chart descriptions, store traits
//! - **Application Layer** ([`application`]) - Account, analysis and feedback services
//! - **Infrastructure Layer** ([`infrastructure`]) - Flat CSV files for the dataset and the stores
//! - **Rendering** ([`rendering`]) - PNG charts
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML pages and forms
//!
//! ## Quick Start
//!
//! ```bash
//! export DATASET_PATH=Data.csv
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod rendering;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AnalysisService, AuthService, FeedbackService};
    pub use crate::domain::entities::{AdmissionRecord, Credential, FeedbackEntry};
    pub use crate::domain::query::{AdmissionTable, Prediction};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
