//! Admission record entity loaded from the dataset file.

use serde::Deserialize;

/// A single row of the admissions dataset.
///
/// Column names follow the dataset header (`NAME`, `COURSE`, `CATEGORY`,
/// `GENDER`, `YEAR`, `CLOSE RANK`). Unknown columns are ignored on load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdmissionRecord {
    #[serde(rename = "NAME")]
    pub college: String,
    #[serde(rename = "COURSE")]
    pub course: String,
    #[serde(rename = "CATEGORY")]
    pub category: String,
    #[serde(rename = "GENDER")]
    pub gender: String,
    #[serde(rename = "YEAR")]
    pub year: i32,
    #[serde(rename = "CLOSE RANK")]
    pub closing_rank: f64,
}

impl AdmissionRecord {
    /// Creates a new AdmissionRecord instance.
    pub fn new(
        college: impl Into<String>,
        course: impl Into<String>,
        category: impl Into<String>,
        gender: impl Into<String>,
        year: i32,
        closing_rank: f64,
    ) -> Self {
        Self {
            college: college.into(),
            course: course.into(),
            category: category.into(),
            gender: gender.into(),
            year,
            closing_rank,
        }
    }
}
