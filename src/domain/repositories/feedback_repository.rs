//! Repository trait for feedback submissions.

use async_trait::async_trait;

use super::store_error::StoreResult;
use crate::domain::entities::FeedbackEntry;

/// Append-only sink for feedback entries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::CsvFeedbackRepository`] - CSV file implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Appends one entry, creating the store (with its header) if needed.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreError`] if the store cannot be written.
    async fn append(&self, entry: &FeedbackEntry) -> StoreResult<()>;

    /// Checks that the store location is writable.
    async fn health_check(&self) -> bool;
}
