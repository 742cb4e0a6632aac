//! Bounds-checked time-step index.

use crate::error::IndexOutOfRange;
use serde::Serialize;

/// The currently displayed time step.
///
/// A `SelectedIndex` always satisfies `get() < column_count()`: the only ways
/// to obtain one are [`SelectedIndex::new`], which validates, and
/// [`SelectedIndex::advance`], which wraps back to 0 after the last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "usize")]
pub struct SelectedIndex {
    index: usize,
    column_count: usize,
}

impl SelectedIndex {
    /// Validate `index` against a dataset with `column_count` time steps.
    pub fn new(index: usize, column_count: usize) -> Result<Self, IndexOutOfRange> {
        if index < column_count {
            Ok(Self {
                index,
                column_count,
            })
        } else {
            Err(IndexOutOfRange {
                index,
                column_count,
            })
        }
    }

    /// The first time step. Fails only when there are no columns at all.
    pub fn first(column_count: usize) -> Result<Self, IndexOutOfRange> {
        Self::new(0, column_count)
    }

    /// Step forward by one, wrapping to 0 past the last column.
    pub fn advance(self) -> Self {
        Self {
            index: (self.index + 1) % self.column_count,
            column_count: self.column_count,
        }
    }

    pub fn get(self) -> usize {
        self.index
    }

    pub fn column_count(self) -> usize {
        self.column_count
    }
}

impl From<SelectedIndex> for usize {
    fn from(index: SelectedIndex) -> Self {
        index.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(SelectedIndex::new(2, 3).is_ok());
        assert_eq!(
            SelectedIndex::new(3, 3),
            Err(IndexOutOfRange {
                index: 3,
                column_count: 3
            })
        );
        assert!(SelectedIndex::first(0).is_err());
    }

    #[test]
    fn test_advance_wraps_at_last_column() {
        let last = SelectedIndex::new(2, 3).unwrap();
        assert_eq!(last.advance().get(), 0);

        let single = SelectedIndex::first(1).unwrap();
        assert_eq!(single.advance().get(), 0);
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let idx = SelectedIndex::new(7, 10).unwrap();
        assert_eq!(serde_json::to_string(&idx).unwrap(), "7");
    }
}
