//! Weekly trend series and one-time chart setup
//!
//! The series is decorative: seven points shaped around the current
//! temperature, not provider forecast data.

use std::sync::OnceLock;

use ratatui::symbols::Marker;
use ratatui::widgets::GraphType;

use crate::state::TempUnit;

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Shared chart configuration, built once per process.
#[derive(Debug)]
pub struct ChartSetup {
    pub labels: [&'static str; 7],
    pub marker: Marker,
    pub graph_type: GraphType,
    /// Headroom added above and below the series on the y axis
    pub y_margin: f64,
}

static CHART_SETUP: OnceLock<ChartSetup> = OnceLock::new();

/// Initialise chart configuration. Safe to call any number of times; every
/// call returns the same instance.
pub fn register() -> &'static ChartSetup {
    CHART_SETUP.get_or_init(|| {
        tracing::debug!("chart setup registered");
        ChartSetup {
            labels: WEEKDAYS,
            marker: Marker::Braille,
            graph_type: GraphType::Line,
            y_margin: 1.0,
        }
    })
}

/// `[t, t+2, t-1, t+3, t-2, t+1, t]`, Monday first.
pub fn weekly_series(temperature: f64) -> [f64; 7] {
    let t = temperature;
    [t, t + 2.0, t - 1.0, t + 3.0, t - 2.0, t + 1.0, t]
}

/// Series as `(x, y)` points for a ratatui dataset.
pub fn series_points(temperature: f64) -> Vec<(f64, f64)> {
    weekly_series(temperature)
        .into_iter()
        .enumerate()
        .map(|(day, value)| (day as f64, value))
        .collect()
}

pub fn dataset_label(unit: TempUnit) -> String {
    format!("Temperature in {}", unit.symbol())
}

/// Lower and upper y-axis bounds that contain the series.
pub fn y_bounds(temperature: f64) -> [f64; 2] {
    let margin = register().y_margin;
    [temperature - 2.0 - margin, temperature + 3.0 + margin]
}
