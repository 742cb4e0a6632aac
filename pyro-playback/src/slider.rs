//! Time-step slider settings.

use serde::Serialize;

/// Range, step and tick marks of the time-step slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliderConfig {
    pub min: usize,
    pub max: usize,
    pub step: usize,
    /// Positions that get a visible tick label.
    pub marks: Vec<usize>,
    pub tooltip_always_visible: bool,
}

impl SliderConfig {
    /// Slider over `[0, column_count - 1]`.
    ///
    /// Marks are placed every 100 steps for 1000+ columns, otherwise at
    /// roughly ten even intervals. The last column always gets a mark.
    pub fn for_columns(column_count: usize) -> Self {
        let max = column_count.saturating_sub(1);
        let interval = Self::mark_interval(column_count);

        let mut marks: Vec<usize> = (0..=max).step_by(interval).collect();
        if marks.last() != Some(&max) {
            marks.push(max);
        }

        Self {
            min: 0,
            max,
            step: 1,
            marks,
            tooltip_always_visible: true,
        }
    }

    fn mark_interval(column_count: usize) -> usize {
        if column_count >= 1000 {
            100
        } else {
            column_count.saturating_sub(1).div_ceil(10).max(1)
        }
    }
}
