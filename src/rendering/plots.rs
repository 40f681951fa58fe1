//! Line and box plot drawing.

use plotters::coord::Shift;
use plotters::data::Quartiles;
use plotters::prelude::*;

use super::{ChartError, FONT_FAMILY, draw_error};
use crate::domain::chart::{DistributionChart, TrendChart};

type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

const CAPTION_SIZE: f64 = 24.0;
const LABEL_SIZE: f64 = 14.0;

/// Pads a value range so points never sit on the plot border.
fn padded(min: f64, max: f64) -> (f64, f64) {
    let pad = ((max - min) * 0.1).max(1.0);
    (min - pad, max + pad)
}

/// Closing rank against year, blue line with circle markers.
pub(super) fn draw_trend(root: &Canvas<'_>, chart: &TrendChart) -> Result<(), ChartError> {
    let (Some(min_year), Some(max_year)) = (
        chart.points.iter().map(|p| p.0).min(),
        chart.points.iter().map(|p| p.0).max(),
    ) else {
        return Err(ChartError::NoData);
    };

    let ranks = chart.points.iter().map(|p| p.1);
    let (low, high) = padded(
        ranks.clone().fold(f64::INFINITY, f64::min),
        ranks.fold(f64::NEG_INFINITY, f64::max),
    );

    let mut plot = ChartBuilder::on(root)
        .caption(&chart.title, (FONT_FAMILY, CAPTION_SIZE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d((min_year - 1)..(max_year + 1), low..high)
        .map_err(draw_error)?;

    plot.configure_mesh()
        .x_desc("Year")
        .y_desc("Closing Rank")
        .label_style((FONT_FAMILY, LABEL_SIZE))
        .x_label_formatter(&|year| year.to_string())
        .draw()
        .map_err(draw_error)?;

    plot.draw_series(LineSeries::new(chart.points.iter().copied(), &BLUE))
        .map_err(draw_error)?;
    plot.draw_series(
        chart
            .points
            .iter()
            .map(|&point| Circle::new(point, 4, BLUE.filled())),
    )
    .map_err(draw_error)?;

    Ok(())
}

/// One vertical box per category, category labels rotated 90 degrees.
pub(super) fn draw_distribution(
    root: &Canvas<'_>,
    chart: &DistributionChart,
) -> Result<(), ChartError> {
    let ranks = chart.groups.iter().flat_map(|g| g.ranks.iter().copied());
    let (Some(min), Some(max)) = (
        ranks.clone().reduce(f64::min),
        ranks.reduce(f64::max),
    ) else {
        return Err(ChartError::NoData);
    };
    let (low, high) = padded(min, max);

    let labels: Vec<&str> = chart.groups.iter().map(|g| g.category.as_str()).collect();
    let segments = labels.len() as i32;

    let mut plot = ChartBuilder::on(root)
        .caption(&chart.title, (FONT_FAMILY, CAPTION_SIZE))
        .margin(20)
        .x_label_area_size(120)
        .y_label_area_size(80)
        .build_cartesian_2d((0..segments).into_segmented(), (low as f32)..(high as f32))
        .map_err(draw_error)?;

    let category_label = |value: &SegmentValue<i32>| match value {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => labels
            .get(*i as usize)
            .map(|s| s.to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };

    plot.configure_mesh()
        .x_desc("Category")
        .y_desc("Closing Rank")
        .x_labels(labels.len())
        .x_label_style(
            (FONT_FAMILY, LABEL_SIZE)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_label_style((FONT_FAMILY, LABEL_SIZE))
        .x_label_formatter(&category_label)
        .draw()
        .map_err(draw_error)?;

    plot.draw_series(chart.groups.iter().enumerate().map(|(i, group)| {
        let quartiles = Quartiles::new(group.ranks.as_slice());
        Boxplot::new_vertical(SegmentValue::CenterOf(i as i32), &quartiles)
            .width(30)
            .whisker_width(0.5)
            .style(&BLUE)
    }))
    .map_err(draw_error)?;

    Ok(())
}
