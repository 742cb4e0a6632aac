//! Panel presets for the pyrolysis dashboard.
//!
//! The density and kinetic-rate panels are two configurations of the same
//! line chart; they only differ in labels and y range.

use crate::chart::{ChartConfig, HeatmapConfig};
use pyro_data::Dataset;

/// Line color shared by both panels.
pub const LINE_COLOR: &str = "#3fb817";

/// Fraction of the time-step count shown as leading sample positions.
pub const X_WINDOW_DIVISOR: usize = 5;

pub const DENSITY_CHART_ID: &str = "rho-char";
pub const KINETIC_CHART_ID: &str = "r-kin";
pub const HEATMAP_ID: &str = "rho-char-heatmap";

/// Number of leading positions shown for a dataset with `column_count` time steps.
pub fn x_window(column_count: usize) -> usize {
    (column_count / X_WINDOW_DIVISOR).max(1)
}

fn x_title(window: usize) -> String {
    format!("First {} x's", window)
}

/// Charcoal density panel.
pub fn density(dataset: &Dataset) -> ChartConfig {
    let window = x_window(dataset.column_count());
    ChartConfig {
        id: DENSITY_CHART_ID.to_string(),
        title: "Density of charcoal".to_string(),
        x_title: x_title(window),
        y_title: "Density [kg/m^3]".to_string(),
        x_window: window,
        y_range: (0.0, 0.06),
        color: LINE_COLOR.to_string(),
    }
}

/// Kinetic reaction-rate panel.
pub fn kinetic(dataset: &Dataset) -> ChartConfig {
    let window = x_window(dataset.column_count());
    ChartConfig {
        id: KINETIC_CHART_ID.to_string(),
        title: "R kinetic".to_string(),
        x_title: x_title(window),
        // Placeholder label; the rate's units were never settled upstream.
        y_title: "Arreglar unidades [kg/m^3]".to_string(),
        x_window: window,
        y_range: (0.0, 0.000015),
        color: LINE_COLOR.to_string(),
    }
}

/// Full-dataset heatmap of charcoal density.
pub fn density_heatmap() -> HeatmapConfig {
    HeatmapConfig {
        id: HEATMAP_ID.to_string(),
        title: "Charcoal density over time".to_string(),
        x_title: "Time step".to_string(),
        y_title: "Position".to_string(),
        color_scale: "Viridis".to_string(),
    }
}
