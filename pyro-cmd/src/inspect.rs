//! Dataset summary for a single simulation CSV.

use pyro_data::loader::load_path;
use pyro_data::Dataset;
use pyro_playback::panels::x_window;
use std::path::Path;

/// Load `path` and print its summary to stdout.
pub fn run_inspect(path: &Path) -> anyhow::Result<()> {
    let dataset = load_path(path)?;
    println!("{}", summarize(&dataset));
    Ok(())
}

/// Human-readable shape and value range of a dataset.
pub fn summarize(dataset: &Dataset) -> String {
    let labels = dataset.labels();
    let first = labels.first().map(String::as_str).unwrap_or("-");
    let last = labels.last().map(String::as_str).unwrap_or("-");
    let range = match dataset.value_range() {
        Some((lo, hi)) => format!("{:e} .. {:e}", lo, hi),
        None => "no finite samples".to_string(),
    };
    let gaps = (0..dataset.column_count())
        .filter_map(|i| dataset.column(i))
        .flatten()
        .filter(|v| v.is_nan())
        .count();

    format!(
        "{name}\n  positions:  {rows}\n  time steps: {cols} ({first} .. {last})\n  chart window: first {window} positions\n  values:     {range}\n  gaps:       {gaps}",
        name = dataset.name(),
        rows = dataset.row_count(),
        cols = dataset.column_count(),
        window = x_window(dataset.column_count()),
    )
}
