//! Error types for dataset loading and time-step selection.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a CSV file into a [`Dataset`](crate::Dataset).
///
/// Every variant is fatal at startup; there is no partial dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read (or decompressed).
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A cell that should hold a sample is not a number.
    #[error("Non-numeric value {value:?} at row {row}, column {column}")]
    NonNumeric {
        row: usize,
        column: usize,
        value: String,
    },

    /// A data row has a different number of fields than the first row.
    #[error("Row {row} has {found} fields, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Columns handed to the dataset constructor differ in length.
    #[error("Column {column} has {found} samples, expected {expected}")]
    UnequalColumns {
        column: usize,
        expected: usize,
        found: usize,
    },

    /// The input has no data rows or no sample columns.
    #[error("Dataset {0} is empty")]
    Empty(String),
}

/// A time-step index that does not address a column of the dataset.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Index {index} out of range for {column_count} columns")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub column_count: usize,
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
