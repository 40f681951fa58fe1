//! DTO for the dropdown options endpoint.

use serde::Serialize;

use crate::domain::query::FilterOptions;

/// Distinct values of each categorical column.
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub colleges: Vec<String>,
    pub courses: Vec<String>,
    pub categories: Vec<String>,
    pub genders: Vec<String>,
}

impl From<FilterOptions> for OptionsResponse {
    fn from(options: FilterOptions) -> Self {
        Self {
            colleges: options.colleges,
            courses: options.courses,
            categories: options.categories,
            genders: options.genders,
        }
    }
}
