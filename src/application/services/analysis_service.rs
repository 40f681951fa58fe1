//! Dataset analysis: dropdown options, seat predictions and chart assembly.

use std::sync::Arc;

use crate::domain::chart::{Chart, DistributionChart, TrendChart};
use crate::domain::query::{
    AdmissionTable, AttributeFilter, EmptyScope, FilterOptions, Prediction, PredictionQuery,
    QueryError, Selection,
};

/// Inputs of a chart request.
///
/// A category of [`Selection::Any`] asks for the per-category box plot; a
/// concrete category asks for the year trend of that category.
#[derive(Debug, Clone)]
pub struct ChartQuery {
    pub college: String,
    pub course: String,
    pub category: Selection,
    pub gender: Selection,
}

/// Read-only queries over the admissions table loaded at startup.
pub struct AnalysisService {
    table: Arc<AdmissionTable>,
}

impl AnalysisService {
    pub fn new(table: Arc<AdmissionTable>) -> Self {
        Self { table }
    }

    pub fn row_count(&self) -> usize {
        self.table.len()
    }

    /// Distinct values for the dropdowns.
    pub fn options(&self) -> FilterOptions {
        self.table.options()
    }

    /// Predicts admission for an exact college/course/category/gender match.
    pub fn predict(&self, query: &PredictionQuery) -> Prediction {
        let prediction = self.table.predict(query);
        tracing::debug!(
            college = %query.college,
            course = %query.course,
            rank = query.rank,
            outcome = ?prediction,
            "prediction"
        );
        prediction
    }

    /// Builds the chart for an analysis request.
    ///
    /// # Errors
    ///
    /// - [`QueryError::NotFound`] if the college is not in the dataset
    /// - [`QueryError::EmptyResult`] if no rows match the remaining filters
    pub fn chart(&self, query: &ChartQuery) -> Result<Chart, QueryError> {
        let college = query.college.trim().to_uppercase();
        let course = query.course.trim().to_uppercase();

        if !self.table.contains_college(&query.college) {
            return Err(QueryError::NotFound { college });
        }

        let filter =
            AttributeFilter::new(&query.college, &query.course).with_gender(&query.gender);

        match &query.category {
            Selection::Any => {
                let groups = self.table.distribution_for_plot(&filter);
                if groups.is_empty() {
                    return Err(QueryError::EmptyResult {
                        scope: EmptyScope::Options,
                    });
                }

                let gender = query.gender.as_option().unwrap_or("All genders");
                Ok(Chart::Distribution(DistributionChart {
                    title: format!(
                        "Box Plot of Closing Rank by Category ({college} - {course} - {gender})"
                    ),
                    groups,
                }))
            }
            Selection::Only(category) => {
                let points = self
                    .table
                    .series_for_plot(&filter.with_category(&query.category));
                if points.is_empty() {
                    return Err(QueryError::EmptyResult {
                        scope: EmptyScope::Category,
                    });
                }

                Ok(Chart::Trend(TrendChart {
                    title: format!("Closing Rank vs Year for {college} - {course} - {category}"),
                    points,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AdmissionRecord;

    fn service() -> AnalysisService {
        AnalysisService::new(Arc::new(AdmissionTable::new(vec![
            AdmissionRecord::new("IIT X", "CS", "GEN", "M", 2022, 120.0),
            AdmissionRecord::new("IIT X", "CS", "GEN", "M", 2021, 100.0),
            AdmissionRecord::new("IIT X", "CS", "OBC", "F", 2021, 300.0),
        ])))
    }

    fn chart_query(college: &str, category: &str, gender: &str) -> ChartQuery {
        ChartQuery {
            college: college.to_string(),
            course: "cs".to_string(),
            category: Selection::parse(category),
            gender: Selection::parse(gender),
        }
    }

    #[test]
    fn test_chart_unknown_college_is_not_found() {
        let err = service().chart(&chart_query("iit y", "none", "none")).unwrap_err();

        assert_eq!(
            err,
            QueryError::NotFound {
                college: "IIT Y".to_string()
            }
        );
    }

    #[test]
    fn test_chart_unknown_category_is_empty_result() {
        let err = service().chart(&chart_query("IIT X", "SC", "none")).unwrap_err();

        assert_eq!(
            err,
            QueryError::EmptyResult {
                scope: EmptyScope::Category
            }
        );
        assert_eq!(err.to_string(), "No data found for the selected category.");
    }

    #[test]
    fn test_chart_trend_sorted_with_title() {
        let chart = service().chart(&chart_query("iit x", "GEN", "none")).unwrap();

        match chart {
            Chart::Trend(trend) => {
                assert_eq!(trend.points, vec![(2021, 100.0), (2022, 120.0)]);
                assert_eq!(trend.title, "Closing Rank vs Year for IIT X - CS - GEN");
            }
            other => panic!("expected trend chart, got {other:?}"),
        }
    }

    #[test]
    fn test_chart_distribution_respects_gender() {
        let chart = service().chart(&chart_query("IIT X", "none", "F")).unwrap();

        match chart {
            Chart::Distribution(distribution) => {
                assert_eq!(distribution.groups.len(), 1);
                assert_eq!(distribution.groups[0].category, "OBC");
                assert!(distribution.title.contains("IIT X - CS - F"));
            }
            other => panic!("expected distribution chart, got {other:?}"),
        }
    }

    #[test]
    fn test_chart_distribution_without_rows_is_empty_result() {
        let query = ChartQuery {
            course: "EE".to_string(),
            ..chart_query("IIT X", "none", "none")
        };

        let err = service().chart(&query).unwrap_err();
        assert_eq!(
            err,
            QueryError::EmptyResult {
                scope: EmptyScope::Options
            }
        );
    }

    #[test]
    fn test_predict_end_to_end_example() {
        let service = service();
        let query = |rank| PredictionQuery {
            college: "IIT X".to_string(),
            course: "CS".to_string(),
            category: "GEN".to_string(),
            gender: "M".to_string(),
            rank,
        };

        assert_eq!(service.predict(&query(100)), Prediction::WillLikelyGetSeat);
        assert_eq!(service.predict(&query(150)), Prediction::WillLikelyNotGetSeat);
    }
}
