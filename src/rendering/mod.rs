//! PNG rendering of chart descriptions.
//!
//! Charts are drawn with `plotters` into an in-memory RGB buffer and encoded
//! with `image`. Rendering reads only the [`Chart`] it is given, so calling it
//! twice with the same chart yields the same bytes.
//!
//! Text uses an embedded DejaVu Sans face registered once per process, which
//! keeps rendering independent of the host's font configuration.
//!
//! Rendering is CPU-bound; async callers should run it on the blocking pool.

mod plots;

use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use plotters::style::{FontStyle, register_font};
use std::io::Cursor;
use std::sync::LazyLock;
use thiserror::Error;

use crate::domain::chart::Chart;

/// Output width in pixels.
pub const WIDTH: u32 = 1200;
/// Output height in pixels.
pub const HEIGHT: u32 = 600;

/// Font family name every chart style refers to.
pub(crate) const FONT_FAMILY: &str = "sans-serif";

static FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

static FONT_REGISTRATION: LazyLock<Result<(), String>> = LazyLock::new(|| {
    register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES)
        .map_err(|_| "embedded font could not be parsed".to_string())
});

/// Chart rendering failure.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart has no data to draw")]
    NoData,
    #[error("font registration failed: {0}")]
    Font(String),
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("pixel buffer does not match {WIDTH}x{HEIGHT}")]
    Buffer,
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

pub(crate) fn draw_error<E: std::error::Error>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}

/// Renders `chart` as PNG bytes.
///
/// # Errors
///
/// Returns [`ChartError::NoData`] for a chart without points or groups, and
/// the other variants when drawing or encoding fails.
pub fn render_png(chart: &Chart) -> Result<Vec<u8>, ChartError> {
    FONT_REGISTRATION.clone().map_err(ChartError::Font)?;

    let mut buffer = vec![0u8; WIDTH as usize * HEIGHT as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        match chart {
            Chart::Trend(trend) => plots::draw_trend(&root, trend)?,
            Chart::Distribution(distribution) => plots::draw_distribution(&root, distribution)?,
        }

        root.present().map_err(draw_error)?;
    }

    encode_png(buffer)
}

fn encode_png(buffer: Vec<u8>) -> Result<Vec<u8>, ChartError> {
    let image = RgbImage::from_raw(WIDTH, HEIGHT, buffer).ok_or(ChartError::Buffer)?;
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{DistributionChart, TrendChart};
    use crate::domain::query::CategoryDistribution;

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    fn trend(points: Vec<(i32, f64)>) -> Chart {
        Chart::Trend(TrendChart {
            title: "Closing Rank vs Year for IIT X - CS - GEN".to_string(),
            points,
        })
    }

    #[test]
    fn test_render_trend_png() {
        let png = render_png(&trend(vec![(2020, 90.0), (2021, 100.0), (2022, 120.0)])).unwrap();
        assert!(png.starts_with(PNG_SIGNATURE));
    }

    #[test]
    fn test_render_single_point_trend() {
        let png = render_png(&trend(vec![(2021, 100.0)])).unwrap();
        assert!(png.starts_with(PNG_SIGNATURE));
    }

    #[test]
    fn test_render_distribution_png() {
        let chart = Chart::Distribution(DistributionChart {
            title: "Box Plot of Closing Rank by Category".to_string(),
            groups: vec![
                CategoryDistribution {
                    category: "GEN".to_string(),
                    ranks: vec![100.0, 120.0, 110.0],
                },
                CategoryDistribution {
                    category: "OBC-NCL".to_string(),
                    ranks: vec![300.0],
                },
            ],
        });

        let png = render_png(&chart).unwrap();
        assert!(png.starts_with(PNG_SIGNATURE));
    }

    #[test]
    fn test_render_is_deterministic() {
        let chart = trend(vec![(2020, 90.0), (2021, 100.0)]);
        assert_eq!(render_png(&chart).unwrap(), render_png(&chart).unwrap());
    }

    #[test]
    fn test_render_empty_chart_is_rejected() {
        assert!(matches!(render_png(&trend(vec![])), Err(ChartError::NoData)));

        let empty = Chart::Distribution(DistributionChart {
            title: String::new(),
            groups: vec![],
        });
        assert!(matches!(render_png(&empty), Err(ChartError::NoData)));
    }
}
