//! Plotting infrastructure for rehash distribution charts
//!
//! This module draws the rehash distribution as an overlaid bar chart using the
//! [`plotters`] crate. Charts are saved as PNG files with a fixed 640x480 resolution.

use crate::analysis::constants::{
    BAR_WIDTH, CUMULATIVE_SERIES_LABEL, FREQUENCY_SERIES_LABEL, PLOT_SIZE, X_AXIS_LABEL,
    Y_AXIS_LABEL,
};
use plotters::prelude::*;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Colour of the cumulative (background) bars
const CUMULATIVE_COLOR: RGBColor = RGBColor(191, 191, 0);

/// Colour of the per rehash count (foreground) bars
const FREQUENCY_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Slack allowed around 0-100 for rounding in `count * 100 / total`
const PERCENT_TOLERANCE: f64 = 1e-9;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

fn clamp_percentage(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Formats a vertical axis value as a percentage label
fn format_percentage(value: f64) -> String {
    format!("{:.0}%", value)
}

/// Formats a horizontal axis value, leaving positions between rehash counts blank
fn format_rehash_count(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-9 {
        format!("{}", rounded as i64)
    } else {
        String::new()
    }
}

/// Creates the rehash distribution bar chart and saves it as a PNG file
///
/// The cumulative series is drawn first, forming the background layer; the
/// per rehash count series is drawn over it. Both are centred on the rehash
/// count they are aligned with by index.
///
/// # Arguments
/// * `rehash_counts` - Rehash counts, used as the x position of each bar
/// * `percent_cumulative` - Background series, in percent
/// * `percent_count` - Foreground series, in percent
/// * `output_path` - Path where the PNG file should be saved, overwriting any existing file
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If the data was invalid, the output directory is missing,
///   or rendering failed
///
/// # Chart Properties
/// * Resolution: 640x480 pixels
/// * Format: PNG
/// * Y-axis: percentage labels, scaled to the tallest bar
/// * Grid: Enabled
/// * Legend: Upper right
pub fn create_rehash_plot(
    rehash_counts: &[u64],
    percent_cumulative: &[f64],
    percent_count: &[f64],
    output_path: &Path,
) -> Result<()> {
    validate_series(rehash_counts, percent_cumulative, percent_count)?;

    // The output directory is never created here
    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        if !parent.is_dir() {
            return Err(PlotError::FileSave(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Output directory does not exist: {}", parent.display()),
            )));
        }
    }

    draw_rehash_plot(rehash_counts, percent_cumulative, percent_count, output_path)
}

/// Checks that the series are non-empty, aligned, and hold valid percentages
///
/// Values that overshoot 0-100 by no more than [`PERCENT_TOLERANCE`] are
/// accepted; they are clamped when drawn.
fn validate_series(
    rehash_counts: &[u64],
    percent_cumulative: &[f64],
    percent_count: &[f64],
) -> Result<()> {
    if rehash_counts.is_empty() {
        return Err(PlotError::InvalidData("Data cannot be empty".to_string()));
    }

    if percent_cumulative.len() != rehash_counts.len() || percent_count.len() != rehash_counts.len()
    {
        return Err(PlotError::InvalidData(format!(
            "Series lengths differ: {} rehash counts, {} cumulative, {} frequency values",
            rehash_counts.len(),
            percent_cumulative.len(),
            percent_count.len()
        )));
    }

    for percentage in percent_cumulative.iter().chain(percent_count) {
        let in_range = (-PERCENT_TOLERANCE..=100.0 + PERCENT_TOLERANCE).contains(percentage);
        if !in_range {
            return Err(PlotError::InvalidData(format!(
                "Percentage {} is outside valid range 0-100",
                percentage
            )));
        }
    }

    Ok(())
}

fn draw_rehash_plot(
    rehash_counts: &[u64],
    percent_cumulative: &[f64],
    percent_count: &[f64],
    output_path: &Path,
) -> Result<()> {
    let root = BitMapBackend::new(output_path, PLOT_SIZE);
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    // Half a slot of padding on either side so the outer bars are not clipped
    let x_min = rehash_counts.iter().copied().min().unwrap_or(0) as f64 - 0.5;
    let x_max = rehash_counts.iter().copied().max().unwrap_or(0) as f64 + 0.5;

    let y_top = percent_cumulative
        .iter()
        .chain(percent_count)
        .map(|&y| clamp_percentage(y))
        .fold(0.0, f64::max);
    let y_max = (y_top * 1.05).max(1.0);

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    // Mesh lines form the background grid
    chart_context
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .x_labels(rehash_counts.len() + 1)
        .x_label_formatter(&|x| format_rehash_count(*x))
        .y_label_formatter(&|y| format_percentage(*y))
        .axis_desc_style(("sans-serif", 18))
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let half_width = BAR_WIDTH / 2.0;
    let bars = |values: &[f64], color: RGBColor| {
        rehash_counts
            .iter()
            .zip(values)
            .map(move |(&x, &y)| {
                let x = x as f64;
                let y = clamp_percentage(y);
                Rectangle::new([(x - half_width, 0.0), (x + half_width, y)], color.filled())
            })
            .collect::<Vec<_>>()
    };

    chart_context
        .draw_series(bars(percent_cumulative, CUMULATIVE_COLOR))
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label(CUMULATIVE_SERIES_LABEL)
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], CUMULATIVE_COLOR.filled()));

    chart_context
        .draw_series(bars(percent_count, FREQUENCY_COLOR))
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label(FREQUENCY_SERIES_LABEL)
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], FREQUENCY_COLOR.filled()));

    chart_context
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Ensure everything is properly rendered and saved
    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
