//! Feedback submission service.

use std::sync::Arc;

use crate::domain::entities::FeedbackEntry;
use crate::domain::repositories::FeedbackRepository;
use crate::error::AppError;

/// Appends free-text feedback to the feedback sink.
///
/// No validation is applied to either field.
pub struct FeedbackService<R: FeedbackRepository> {
    repository: Arc<R>,
}

impl<R: FeedbackRepository> FeedbackService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores one feedback entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the sink cannot be written.
    pub async fn submit(&self, seat: &str, comment: &str) -> Result<(), AppError> {
        let entry = FeedbackEntry::new(seat, comment);
        self.repository.append(&entry).await?;

        tracing::info!(seat, length = comment.len(), "feedback stored");
        Ok(())
    }

    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}
