//! CSV loading for simulation output files.
//!
//! # CSV Format
//!
//! Rows are spatial sample positions, columns are time steps:
//!
//! ```text
//! ,0,1,2
//! 0,0.0012,0.0019,0.0025
//! 1,0.0010,0.0017,0.0023
//! ```
//!
//! - The first record is always the header, even when its cells are numeric
//!   (pandas writes `0,1,2,...` for an unnamed frame). Its cells become the
//!   column labels.
//! - A header whose first cell is blank marks a leading row-index column
//!   (as written by pandas `to_csv`); that column is dropped.
//! - Empty cells are read as NaN and show up as gaps in the charts.
//! - Paths ending in `.gz` are gunzipped before parsing.

use crate::error::{LoadError, Result};
use crate::Dataset;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read and parse a CSV (or gzip-compressed CSV) file.
///
/// The dataset is named after the file stem, e.g. `Res_rho_char` for
/// `data/Res_rho_char.csv.gz`.
pub fn load_path(path: &Path) -> Result<Dataset> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let mut text = String::new();
    if is_gzip(path) {
        GzDecoder::new(file).read_to_string(&mut text).map_err(io_err)?;
    } else {
        file.read_to_string(&mut text).map_err(io_err)?;
    }

    let dataset = parse_csv(&dataset_name(path), &text)?;
    log::info!(
        "loader: Loaded {} from {} ({} positions x {} time steps)",
        dataset.name(),
        path.display(),
        dataset.row_count(),
        dataset.column_count()
    );
    Ok(dataset)
}

/// Parse CSV text already in memory (typically via `include_str!`).
pub fn parse_csv(name: &str, csv_data: &str) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut records = rdr.records();
    let first = match records.next() {
        Some(r) => r?,
        None => return Err(LoadError::Empty(name.to_string())),
    };

    let header: Vec<&str> = first.iter().collect();
    let skip_index = header.first().is_some_and(|c| c.is_empty());
    let skip = usize::from(skip_index);
    let width = header.len();

    if width <= skip {
        return Err(LoadError::Empty(name.to_string()));
    }

    let labels: Vec<String> = header[skip..].iter().map(|c| c.to_string()).collect();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); width - skip];
    let mut row = 0usize;

    for result in records {
        let record = result?;
        let cells: Vec<&str> = record.iter().collect();
        // csv yields a single empty field for blank lines
        if cells.len() == 1 && cells[0].is_empty() {
            continue;
        }
        if cells.len() != width {
            return Err(LoadError::Ragged {
                row,
                expected: width,
                found: cells.len(),
            });
        }
        push_row(&mut columns, &cells, skip, row)?;
        row += 1;
    }

    log::debug!(
        "loader: Parsed {} ({} rows, index column: {})",
        name,
        row,
        skip_index
    );
    Dataset::from_columns(name, labels, columns)
}

fn push_row(columns: &mut [Vec<f64>], cells: &[&str], skip: usize, row: usize) -> Result<()> {
    for (offset, cell) in cells[skip..].iter().enumerate() {
        let value = if cell.is_empty() {
            f64::NAN
        } else {
            cell.parse::<f64>().map_err(|_| LoadError::NonNumeric {
                row,
                column: offset + skip,
                value: cell.to_string(),
            })?
        };
        columns[offset].push(value);
    }
    Ok(())
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

fn dataset_name(path: &Path) -> String {
    let mut stem = path.to_path_buf();
    if is_gzip(&stem) {
        stem.set_extension("");
    }
    stem.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
