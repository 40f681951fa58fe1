//! Feedback entry entity.

use serde::Serialize;

/// A free-text comment submitted for a seat.
///
/// Neither field is validated; missing form fields arrive as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    #[serde(rename = "SEAT")]
    pub seat: String,
    #[serde(rename = "FEEDBACK")]
    pub comment: String,
}

impl FeedbackEntry {
    pub fn new(seat: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            seat: seat.into(),
            comment: comment.into(),
        }
    }
}
