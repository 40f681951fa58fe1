//! Query and filter engine over the admissions table.
//!
//! The table is loaded once at startup and never mutated; every operation here
//! borrows it immutably, so a single [`AdmissionTable`] behind an `Arc` serves
//! all concurrent requests.
//!
//! # Matching Rules
//!
//! - College and course always filter, compared case-insensitively after
//!   trimming surrounding whitespace on both sides.
//! - Category and gender filter only when a [`Selection::Only`] is given.
//!   Form values equal to [`ANY_SENTINEL`] (any case) or empty mean
//!   [`Selection::Any`].
//! - Filtering preserves dataset order.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::AdmissionRecord;

/// Form value meaning "do not filter on this attribute".
pub const ANY_SENTINEL: &str = "none";

/// Normalizes a categorical token for comparison.
fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Filter on a single optional attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Any,
    Only(String),
}

impl Selection {
    /// Parses a raw form value, mapping the `none` sentinel and empty input to [`Selection::Any`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ANY_SENTINEL) {
            Selection::Any
        } else {
            Selection::Only(trimmed.to_string())
        }
    }

    /// Requires an exact (case-insensitive) match, with no sentinel handling.
    pub fn exactly(value: &str) -> Self {
        Selection::Only(value.trim().to_string())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }

    pub fn as_option(&self) -> Option<&str> {
        match self {
            Selection::Any => None,
            Selection::Only(v) => Some(v),
        }
    }
}

/// Categorical filter applied to the admissions table.
#[derive(Debug, Clone)]
pub struct AttributeFilter {
    college: String,
    course: String,
    category: Option<String>,
    gender: Option<String>,
}

impl AttributeFilter {
    /// Creates a filter on college and course only.
    pub fn new(college: &str, course: &str) -> Self {
        Self {
            college: normalize(college),
            course: normalize(course),
            category: None,
            gender: None,
        }
    }

    pub fn with_category(mut self, category: &Selection) -> Self {
        self.category = category.as_option().map(normalize);
        self
    }

    pub fn with_gender(mut self, gender: &Selection) -> Self {
        self.gender = gender.as_option().map(normalize);
        self
    }

    /// Returns true if the record passes every active constraint.
    pub fn matches(&self, record: &AdmissionRecord) -> bool {
        normalize(&record.college) == self.college
            && normalize(&record.course) == self.course
            && self
                .category
                .as_ref()
                .is_none_or(|c| normalize(&record.category) == *c)
            && self
                .gender
                .as_ref()
                .is_none_or(|g| normalize(&record.gender) == *g)
    }
}

/// Outcome of a seat prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prediction {
    WillLikelyGetSeat,
    WillLikelyNotGetSeat,
    NoDataFound,
}

impl Prediction {
    /// User-facing message for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Prediction::WillLikelyGetSeat => "You will most likely get a seat.",
            Prediction::WillLikelyNotGetSeat => "You will most likely not get a seat.",
            Prediction::NoDataFound => "No data found for the selected options.",
        }
    }
}

/// Inputs of a seat prediction.
#[derive(Debug, Clone)]
pub struct PredictionQuery {
    pub college: String,
    pub course: String,
    pub category: String,
    pub gender: String,
    pub rank: u64,
}

/// Distinct values of each categorical column, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub colleges: Vec<String>,
    pub courses: Vec<String>,
    pub categories: Vec<String>,
    pub genders: Vec<String>,
}

/// Closing ranks of one category, for box-plot rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDistribution {
    pub category: String,
    pub ranks: Vec<f64>,
}

/// What an empty analysis result was filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyScope {
    Category,
    Options,
}

impl std::fmt::Display for EmptyScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyScope::Category => write!(f, "No data found for the selected category."),
            EmptyScope::Options => write!(f, "No data found for the selected options."),
        }
    }
}

/// Analysis query failures, rendered as distinct user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Error: The institute '{college}' is not found in the dataset.")]
    NotFound { college: String },
    #[error("{scope}")]
    EmptyResult { scope: EmptyScope },
}

/// Immutable in-memory admissions table.
#[derive(Debug, Clone, Default)]
pub struct AdmissionTable {
    records: Vec<AdmissionRecord>,
}

impl AdmissionTable {
    pub fn new(records: Vec<AdmissionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AdmissionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if any record's college matches, ignoring case and surrounding whitespace.
    pub fn contains_college(&self, college: &str) -> bool {
        let wanted = normalize(college);
        self.records.iter().any(|r| normalize(&r.college) == wanted)
    }

    /// Distinct values for every categorical column.
    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            colleges: distinct(self.records.iter().map(|r| r.college.as_str())),
            courses: distinct(self.records.iter().map(|r| r.course.as_str())),
            categories: distinct(self.records.iter().map(|r| r.category.as_str())),
            genders: distinct(self.records.iter().map(|r| r.gender.as_str())),
        }
    }

    /// Rows passing `filter`, in dataset order.
    pub fn filter_by_attributes(&self, filter: &AttributeFilter) -> Vec<&AdmissionRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    /// Predicts admission by comparing `rank` with the mean closing rank of
    /// the exact-match subset. Lower rank numbers are better.
    pub fn predict(&self, query: &PredictionQuery) -> Prediction {
        let filter = AttributeFilter::new(&query.college, &query.course)
            .with_category(&Selection::exactly(&query.category))
            .with_gender(&Selection::exactly(&query.gender));

        let rows = self.filter_by_attributes(&filter);

        match mean_closing_rank(&rows) {
            None => Prediction::NoDataFound,
            Some(mean) if (query.rank as f64) <= mean => Prediction::WillLikelyGetSeat,
            Some(_) => Prediction::WillLikelyNotGetSeat,
        }
    }

    /// `(year, closing_rank)` pairs sorted by year.
    ///
    /// Rows sharing a year are all kept, in dataset order.
    pub fn series_for_plot(&self, filter: &AttributeFilter) -> Vec<(i32, f64)> {
        let mut series: Vec<(i32, f64)> = self
            .filter_by_attributes(filter)
            .into_iter()
            .map(|r| (r.year, r.closing_rank))
            .collect();
        series.sort_by_key(|(year, _)| *year);
        series
    }

    /// Closing ranks grouped by category, groups in first-appearance order.
    pub fn distribution_for_plot(&self, filter: &AttributeFilter) -> Vec<CategoryDistribution> {
        let mut groups: Vec<CategoryDistribution> = Vec::new();

        for record in self.filter_by_attributes(filter) {
            match groups.iter_mut().find(|g| g.category == record.category) {
                Some(group) => group.ranks.push(record.closing_rank),
                None => groups.push(CategoryDistribution {
                    category: record.category.clone(),
                    ranks: vec![record.closing_rank],
                }),
            }
        }

        groups
    }
}

/// Arithmetic mean of closing ranks, `None` for an empty subset.
pub fn mean_closing_rank(rows: &[&AdmissionRecord]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let sum: f64 = rows.iter().map(|r| r.closing_rank).sum();
    Some(sum / rows.len() as f64)
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        college: &str,
        course: &str,
        category: &str,
        gender: &str,
        year: i32,
        rank: f64,
    ) -> AdmissionRecord {
        AdmissionRecord::new(college, course, category, gender, year, rank)
    }

    fn sample_table() -> AdmissionTable {
        AdmissionTable::new(vec![
            record("IIT X", "CS", "GEN", "M", 2022, 120.0),
            record("IIT X", "CS", "GEN", "M", 2021, 100.0),
            record("IIT X", "CS", "OBC", "M", 2021, 300.0),
            record("IIT X", "CS", "GEN", "F", 2021, 150.0),
            record("IIT X", "EE", "GEN", "M", 2021, 500.0),
            record("IIT Delhi", "CS", "GEN", "M", 2020, 50.0),
            record("IIT X", "CS", "OBC", "M", 2020, 280.0),
        ])
    }

    fn query(college: &str, category: &str, gender: &str, rank: u64) -> PredictionQuery {
        PredictionQuery {
            college: college.to_string(),
            course: "CS".to_string(),
            category: category.to_string(),
            gender: gender.to_string(),
            rank,
        }
    }

    #[test]
    fn test_predict_against_mean() {
        let table = sample_table();

        // mean of 120 and 100 is 110
        assert_eq!(
            table.predict(&query("IIT X", "GEN", "M", 100)),
            Prediction::WillLikelyGetSeat
        );
        assert_eq!(
            table.predict(&query("IIT X", "GEN", "M", 110)),
            Prediction::WillLikelyGetSeat
        );
        assert_eq!(
            table.predict(&query("IIT X", "GEN", "M", 111)),
            Prediction::WillLikelyNotGetSeat
        );
        assert_eq!(
            table.predict(&query("IIT X", "GEN", "M", 150)),
            Prediction::WillLikelyNotGetSeat
        );
    }

    #[test]
    fn test_predict_single_row_uses_its_value() {
        let table = sample_table();

        assert_eq!(
            table.predict(&query("IIT X", "GEN", "F", 150)),
            Prediction::WillLikelyGetSeat
        );
        assert_eq!(
            table.predict(&query("IIT X", "GEN", "F", 151)),
            Prediction::WillLikelyNotGetSeat
        );
    }

    #[test]
    fn test_predict_no_data() {
        let table = sample_table();

        assert_eq!(
            table.predict(&query("IIT Y", "GEN", "M", 1)),
            Prediction::NoDataFound
        );
        assert_eq!(
            table.predict(&query("IIT X", "SC", "M", 1)),
            Prediction::NoDataFound
        );
    }

    #[test]
    fn test_predict_treats_none_literally() {
        let table = sample_table();

        assert_eq!(
            table.predict(&query("IIT X", "none", "M", 1)),
            Prediction::NoDataFound
        );
    }

    #[test]
    fn test_predict_is_case_and_whitespace_insensitive() {
        let table = sample_table();

        let a = table.predict(&query("iit x ", " gen", "m", 105));
        let b = table.predict(&query("IIT X", "GEN", "M", 105));
        assert_eq!(a, b);
        assert_eq!(a, Prediction::WillLikelyGetSeat);

        let c = table.predict(&query("iit delhi ", "GEN", "M", 50));
        let d = table.predict(&query("IIT DELHI", "GEN", "M", 50));
        assert_eq!(c, d);
        assert_eq!(c, Prediction::WillLikelyGetSeat);
    }

    #[test]
    fn test_filter_optional_attributes() {
        let table = sample_table();

        let all = AttributeFilter::new("IIT X", "CS");
        assert_eq!(table.filter_by_attributes(&all).len(), 5);

        let by_gender = AttributeFilter::new("IIT X", "CS").with_gender(&Selection::parse("m"));
        assert_eq!(table.filter_by_attributes(&by_gender).len(), 4);

        let sentinel = AttributeFilter::new("IIT X", "CS")
            .with_gender(&Selection::parse("None"))
            .with_category(&Selection::parse("NONE"));
        assert_eq!(table.filter_by_attributes(&sentinel).len(), 5);
    }

    #[test]
    fn test_filter_preserves_dataset_order() {
        let table = sample_table();
        let filter = AttributeFilter::new("IIT X", "CS").with_category(&Selection::parse("OBC"));

        let years: Vec<i32> = table
            .filter_by_attributes(&filter)
            .iter()
            .map(|r| r.year)
            .collect();
        assert_eq!(years, vec![2021, 2020]);
    }

    #[test]
    fn test_series_sorted_by_year_and_stable() {
        let table = AdmissionTable::new(vec![
            record("A", "B", "GEN", "M", 2022, 1.0),
            record("A", "B", "GEN", "M", 2020, 2.0),
            record("A", "B", "OBC", "M", 2022, 3.0),
            record("A", "B", "GEN", "M", 2021, 4.0),
            record("A", "B", "SC", "M", 2020, 5.0),
        ]);

        let series = table.series_for_plot(&AttributeFilter::new("a", "b"));

        assert_eq!(
            series,
            vec![(2020, 2.0), (2020, 5.0), (2021, 4.0), (2022, 1.0), (2022, 3.0)]
        );
        assert!(series.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[test]
    fn test_distribution_groups_by_category() {
        let table = sample_table();
        let filter = AttributeFilter::new("IIT X", "CS").with_gender(&Selection::parse("M"));

        let groups = table.distribution_for_plot(&filter);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "GEN");
        assert_eq!(groups[0].ranks, vec![120.0, 100.0]);
        assert_eq!(groups[1].category, "OBC");
        assert_eq!(groups[1].ranks, vec![300.0, 280.0]);

        let total: usize = groups.iter().map(|g| g.ranks.len()).sum();
        assert_eq!(total, table.filter_by_attributes(&filter).len());
    }

    #[test]
    fn test_options_are_distinct_in_first_appearance_order() {
        let options = sample_table().options();

        assert_eq!(options.colleges, vec!["IIT X", "IIT Delhi"]);
        assert_eq!(options.courses, vec!["CS", "EE"]);
        assert_eq!(options.categories, vec!["GEN", "OBC"]);
        assert_eq!(options.genders, vec!["M", "F"]);
    }

    #[test]
    fn test_contains_college() {
        let table = sample_table();

        assert!(table.contains_college(" iit delhi"));
        assert!(!table.contains_college("IIT Bombay"));
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!(Selection::parse("none"), Selection::Any);
        assert_eq!(Selection::parse(" NONE "), Selection::Any);
        assert_eq!(Selection::parse(""), Selection::Any);
        assert_eq!(Selection::parse(" GEN "), Selection::Only("GEN".to_string()));
    }

    #[test]
    fn test_mean_closing_rank() {
        let table = sample_table();
        let rows = table.filter_by_attributes(
            &AttributeFilter::new("IIT X", "CS")
                .with_category(&Selection::parse("GEN"))
                .with_gender(&Selection::parse("M")),
        );

        assert_eq!(mean_closing_rank(&rows), Some(110.0));
        assert_eq!(mean_closing_rank(&[]), None);
    }
}
