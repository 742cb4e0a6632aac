//! Column-indexed dataset loading for wood pyrolysis simulation output.
//!
//! The simulation writes one CSV per physical quantity (charcoal density,
//! kinetic reaction rate). Each row is a spatial sample position and each
//! column one simulation time step. This crate turns such a file into an
//! immutable [`Dataset`] and hands out individual time-step columns.
//!
//! # Usage
//!
//! ```rust
//! use pyro_data::{loader, SelectedIndex};
//!
//! let dataset = loader::parse_csv("rho_char", "t0,t1,t2\n0.1,0.2,0.3\n0.4,0.5,0.6\n").unwrap();
//! assert_eq!(dataset.column_count(), 3);
//! assert_eq!(dataset.row_count(), 2);
//!
//! let idx = SelectedIndex::new(1, dataset.column_count()).unwrap();
//! assert_eq!(dataset.select(idx), &[0.2, 0.5]);
//! ```

pub mod error;
pub mod index;
pub mod loader;

pub use error::{IndexOutOfRange, LoadError, Result};
pub use index::SelectedIndex;

/// One simulated quantity sampled over a spatial grid, one column per time step.
///
/// All columns have the same length. Built once by [`loader`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    labels: Vec<String>,
    columns: Vec<Vec<f64>>,
    row_count: usize,
}

impl Dataset {
    /// Build a dataset from column-major samples.
    ///
    /// Fails with [`LoadError::Empty`] when there are no columns or no rows,
    /// and with [`LoadError::UnequalColumns`] when columns differ in length.
    pub fn from_columns(
        name: impl Into<String>,
        labels: Vec<String>,
        columns: Vec<Vec<f64>>,
    ) -> Result<Self> {
        let name = name.into();
        let row_count = columns.first().map(Vec::len).unwrap_or(0);
        if columns.is_empty() || row_count == 0 {
            return Err(LoadError::Empty(name));
        }
        if let Some((column, found)) = columns
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != row_count)
        {
            return Err(LoadError::UnequalColumns {
                column,
                expected: row_count,
                found,
            });
        }

        let labels = if labels.len() == columns.len() {
            labels
        } else {
            (0..columns.len()).map(|i| i.to_string()).collect()
        };

        Ok(Self {
            name,
            labels,
            columns,
            row_count,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column labels (time-step names from the header, or `"0"`, `"1"`, ...).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of time steps.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of spatial sample positions.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Raw column accessor.
    pub fn column(&self, index: usize) -> Option<&[f64]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// Samples of the selected time step.
    ///
    /// # Panics
    ///
    /// Panics if `index` was validated against a larger column count than
    /// this dataset has. Indices shared between datasets must be built from
    /// the smallest column count.
    pub fn select(&self, index: SelectedIndex) -> &[f64] {
        &self.columns[index.get()]
    }

    /// Validate a raw index against this dataset.
    pub fn index(&self, index: usize) -> std::result::Result<SelectedIndex, IndexOutOfRange> {
        SelectedIndex::new(index, self.column_count())
    }

    /// Smallest and largest finite sample, ignoring NaN gaps.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.columns
            .iter()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Row-major copy of the samples (`rows()[position][time_step]`).
    pub fn rows(&self) -> Vec<Vec<f64>> {
        (0..self.row_count)
            .map(|row| self.columns.iter().map(|col| col[row]).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Dataset {
        Dataset::from_columns(
            "abc",
            vec!["A".into(), "B".into(), "C".into()],
            vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, f64::NAN]],
        )
        .unwrap()
    }

    #[test]
    fn test_select_returns_row_count_samples() {
        let ds = abc();
        for i in 0..ds.column_count() {
            let idx = ds.index(i).unwrap();
            assert_eq!(ds.select(idx).len(), ds.row_count());
        }
    }

    #[test]
    fn test_select_is_repeatable() {
        let ds = abc();
        let idx = ds.index(1).unwrap();
        let first = ds.select(idx).to_vec();
        let second = ds.select(idx).to_vec();
        assert_eq!(first, second);
        assert_eq!(first, vec![3.0, 4.0]);
    }

    #[test]
    fn test_from_columns_rejects_empty_and_ragged() {
        assert!(matches!(
            Dataset::from_columns("e", vec![], vec![]),
            Err(LoadError::Empty(_))
        ));
        assert!(matches!(
            Dataset::from_columns("e", vec![], vec![vec![]]),
            Err(LoadError::Empty(_))
        ));
        assert!(matches!(
            Dataset::from_columns("r", vec![], vec![vec![1.0], vec![1.0, 2.0]]),
            Err(LoadError::UnequalColumns { .. })
        ));
    }

    #[test]
    fn test_mismatched_labels_fall_back_to_positions() {
        let ds = Dataset::from_columns("d", vec!["only".into()], vec![vec![1.0], vec![2.0]]).unwrap();
        assert_eq!(ds.labels(), &["0".to_string(), "1".to_string()]);
    }

    #[test]
    fn test_value_range_skips_nan() {
        assert_eq!(abc().value_range(), Some((1.0, 5.0)));
    }

    #[test]
    fn test_rows_transposes() {
        let rows = abc().rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![1.0, 3.0, 5.0]);
    }
}
