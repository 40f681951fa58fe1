//! DTOs for the seat prediction endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::query::{Prediction, PredictionQuery};

/// Rank as submitted by the client: the form sends a string, API clients may send a number.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RankInput {
    Number(u64),
    Text(String),
}

impl RankInput {
    /// Parses the rank, trimming surrounding whitespace from text input.
    pub fn value(&self) -> Option<u64> {
        match self {
            RankInput::Number(n) => Some(*n),
            RankInput::Text(s) => s.trim().parse().ok(),
        }
    }
}

fn validate_rank(rank: &RankInput) -> Result<(), ValidationError> {
    match rank.value() {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("rank")
            .with_message("Rank must be a non-negative whole number".into())),
    }
}

/// Prediction request body.
#[derive(Debug, Deserialize, Validate)]
pub struct PredictionRequest {
    #[validate(length(min = 1, message = "College is required"))]
    pub college: String,

    #[validate(length(min = 1, message = "Course is required"))]
    pub course: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "Gender is required"))]
    pub gender: String,

    #[validate(custom(function = "validate_rank"))]
    pub rank: RankInput,
}

impl PredictionRequest {
    /// Converts a validated request into a query.
    ///
    /// Returns `None` if the rank does not parse; call after [`Validate::validate`].
    pub fn to_query(&self) -> Option<PredictionQuery> {
        Some(PredictionQuery {
            college: self.college.clone(),
            course: self.course.clone(),
            category: self.category.clone(),
            gender: self.gender.clone(),
            rank: self.rank.value()?,
        })
    }
}

/// Prediction result.
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    /// Human-readable verdict shown by the prediction page.
    pub prediction: String,
    pub outcome: Prediction,
}

impl From<Prediction> for PredictionResponse {
    fn from(outcome: Prediction) -> Self {
        Self {
            prediction: outcome.message().to_string(),
            outcome,
        }
    }
}
