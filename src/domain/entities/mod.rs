//! Core domain entities representing the admissions data model.
//!
//! Entities are plain data structures without business logic. Filtering and
//! aggregation over admission records live in [`crate::domain::query`].
//!
//! # Entity Types
//!
//! - [`AdmissionRecord`] - One historical closing rank for a college/course/category/gender/year
//! - [`Credential`] - A registered account (identifier and plaintext secret)
//! - [`FeedbackEntry`] - A free-text comment tied to a seat identifier

pub mod admission;
pub mod credential;
pub mod feedback;

pub use admission::AdmissionRecord;
pub use credential::Credential;
pub use feedback::FeedbackEntry;
