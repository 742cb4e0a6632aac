//! Declarative chart descriptions handed to the renderer.
//!
//! Both structs derive `Serialize` so they can be passed to D3.js as JSON.
//! NaN samples serialize as `null` and are drawn as gaps.

use pyro_data::{Dataset, SelectedIndex};
use serde::Serialize;

/// Static display settings for one line-chart panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    /// DOM id of the chart container.
    pub id: String,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// Number of leading sample positions shown on the x-axis.
    pub x_window: usize,
    /// Fixed y-axis range; never autoscaled so the chart does not jump between frames.
    pub y_range: (f64, f64),
    pub color: String,
}

/// Everything a line chart needs to draw one time step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescription {
    pub id: String,
    pub title: String,
    pub x: Vec<usize>,
    pub y: Vec<f64>,
    pub x_title: String,
    pub y_title: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub color: String,
}

/// Build the chart for one column of samples.
///
/// The x-axis covers positions `0..n` where `n = min(x_window, samples.len())`,
/// and `y` holds the matching leading samples, so `x.len() == y.len()`.
/// The x range is taken from the configured window rather than `n` so every
/// frame shares the same axes.
pub fn build_chart(samples: &[f64], config: &ChartConfig) -> ChartDescription {
    let n = config.x_window.min(samples.len());
    let x_max = config.x_window.saturating_sub(1).max(1) as f64;

    ChartDescription {
        id: config.id.clone(),
        title: config.title.clone(),
        x: (0..n).collect(),
        y: samples[..n].to_vec(),
        x_title: config.x_title.clone(),
        y_title: config.y_title.clone(),
        x_range: (0.0, x_max),
        y_range: config.y_range,
        color: config.color.clone(),
    }
}

/// Static display settings for the full-dataset heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapConfig {
    pub id: String,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// D3 interpolator name, e.g. `"Viridis"`.
    pub color_scale: String,
}

/// The whole dataset as a position x time matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapDescription {
    pub id: String,
    pub title: String,
    /// `z[position][time_step]`
    pub z: Vec<Vec<f64>>,
    pub x_title: String,
    pub y_title: String,
    pub color_scale: String,
    /// Finite min/max of `z`; `(0, 0)` when every sample is NaN.
    pub z_range: (f64, f64),
    /// Time step to highlight, if any.
    pub marker: Option<usize>,
}

pub fn build_heatmap(
    dataset: &Dataset,
    config: &HeatmapConfig,
    marker: Option<SelectedIndex>,
) -> HeatmapDescription {
    HeatmapDescription {
        id: config.id.clone(),
        title: config.title.clone(),
        z: dataset.rows(),
        x_title: config.x_title.clone(),
        y_title: config.y_title.clone(),
        color_scale: config.color_scale.clone(),
        z_range: dataset.value_range().unwrap_or((0.0, 0.0)),
        marker: marker.map(SelectedIndex::get),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(window: usize) -> ChartConfig {
        ChartConfig {
            id: "c".into(),
            title: "T".into(),
            x_title: "x".into(),
            y_title: "y".into(),
            x_window: window,
            y_range: (0.0, 1.0),
            color: "#000000".into(),
        }
    }

    #[test]
    fn test_window_truncates_samples() {
        let chart = build_chart(&[0.1, 0.2, 0.3, 0.4], &config(2));
        assert_eq!(chart.x, vec![0, 1]);
        assert_eq!(chart.y, vec![0.1, 0.2]);
        assert_eq!(chart.x_range, (0.0, 1.0));
    }

    #[test]
    fn test_short_column_keeps_lengths_equal() {
        let chart = build_chart(&[0.1, 0.2], &config(40));
        assert_eq!(chart.x.len(), chart.y.len());
        assert_eq!(chart.x.len(), 2);
        assert_eq!(chart.x_range, (0.0, 39.0));
    }

    #[test]
    fn test_lengths_match_for_any_window() {
        let samples: Vec<f64> = (0..25).map(|i| i as f64).collect();
        for window in 0..40 {
            let chart = build_chart(&samples, &config(window));
            assert_eq!(chart.x.len(), chart.y.len());
        }
    }

    #[test]
    fn test_y_range_is_fixed() {
        let small = build_chart(&[0.0001], &config(1));
        let large = build_chart(&[1000.0], &config(1));
        assert_eq!(small.y_range, large.y_range);
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let chart = build_chart(&[f64::NAN, 0.5], &config(2));
        let json = serde_json::to_value(&chart).unwrap();
        assert!(json["y"][0].is_null());
        assert_eq!(json["y"][1], 0.5);
    }

    #[test]
    fn test_heatmap_covers_dataset() {
        let ds = Dataset::from_columns(
            "d",
            vec![],
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
        )
        .unwrap();
        let cfg = HeatmapConfig {
            id: "h".into(),
            title: "H".into(),
            x_title: "t".into(),
            y_title: "x".into(),
            color_scale: "Viridis".into(),
        };
        let heat = build_heatmap(&ds, &cfg, Some(ds.index(1).unwrap()));
        assert_eq!(heat.z.len(), 3);
        assert_eq!(heat.z[2], vec![3.0, 6.0]);
        assert_eq!(heat.z_range, (1.0, 6.0));
        assert_eq!(heat.marker, Some(1));
    }
}
