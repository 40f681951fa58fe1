//! Chart descriptions handed to the rendering layer.
//!
//! A chart is plain data: the title and the points or groups to draw. Building
//! one never touches the renderer, and rendering one never queries the table.

use crate::domain::query::CategoryDistribution;

/// Closing rank against admission year.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub title: String,
    pub points: Vec<(i32, f64)>,
}

/// Closing-rank spread per category.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionChart {
    pub title: String,
    pub groups: Vec<CategoryDistribution>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    /// Line plot, year on the x axis.
    Trend(TrendChart),
    /// Box plot, one box per category.
    Distribution(DistributionChart),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Trend(c) => &c.title,
            Chart::Distribution(c) => &c.title,
        }
    }
}
