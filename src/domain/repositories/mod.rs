//! Repository trait definitions for the domain layer.
//!
//! The credential and feedback stores are flat files today. These traits keep
//! the auth and feedback services independent of that choice so a real
//! datastore can be swapped in later.
//!
//! # Available Repositories
//!
//! - [`CredentialRepository`] - Account lookup and registration
//! - [`FeedbackRepository`] - Feedback sink
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` under `cfg(test)`; see
//! `tests/repository_*.rs` for the CSV implementations.

pub mod credential_repository;
pub mod feedback_repository;
pub mod store_error;

pub use credential_repository::CredentialRepository;
pub use feedback_repository::FeedbackRepository;
pub use store_error::{StoreError, StoreResult};

#[cfg(test)]
pub use credential_repository::MockCredentialRepository;
#[cfg(test)]
pub use feedback_repository::MockFeedbackRepository;
