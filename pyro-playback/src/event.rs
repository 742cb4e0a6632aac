//! Input events and the index reducer.

use pyro_data::{IndexOutOfRange, SelectedIndex};
use serde::{Deserialize, Serialize};

/// One UI input, tagged with the source that fired it.
///
/// Serialized with a `"source"` discriminant so a request body states which
/// control triggered the update:
///
/// ```json
/// {"source": "slider_moved", "index": 42}
/// {"source": "timer_tick", "tick": 17}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Event {
    /// The user dragged the slider to `index`.
    SliderMoved { index: usize },
    /// The user pressed Play.
    PlayClicked,
    /// The playback timer fired; `tick` is the timer's own counter.
    TimerTick { tick: u64 },
    /// Initial render, before any input.
    PageLoaded,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::SliderMoved { .. } => "slider_moved",
            Event::PlayClicked => "play_clicked",
            Event::TimerTick { .. } => "timer_tick",
            Event::PageLoaded => "page_loaded",
        }
    }
}

/// Compute the next selected time step.
///
/// - `PlayClicked` and `TimerTick` advance by one, wrapping to 0 after the
///   last column.
/// - `SliderMoved` jumps straight to the slider value.
/// - `PageLoaded` resets to 0.
///
/// Only a slider value outside `[0, column_count)` can fail.
pub fn reduce(event: Event, current: SelectedIndex) -> Result<SelectedIndex, IndexOutOfRange> {
    match event {
        Event::PlayClicked | Event::TimerTick { .. } => Ok(current.advance()),
        Event::SliderMoved { index } => SelectedIndex::new(index, current.column_count()),
        Event::PageLoaded => SelectedIndex::first(current.column_count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: usize, n: usize) -> SelectedIndex {
        SelectedIndex::new(i, n).unwrap()
    }

    #[test]
    fn test_play_advances_with_wraparound() {
        let n = 5;
        for i in 0..n {
            let next = reduce(Event::PlayClicked, idx(i, n)).unwrap();
            assert_eq!(next.get(), (i + 1) % n);
        }
        assert_eq!(reduce(Event::PlayClicked, idx(4, 5)).unwrap().get(), 0);
    }

    #[test]
    fn test_tick_matches_play() {
        let n = 7;
        for i in 0..n {
            let play = reduce(Event::PlayClicked, idx(i, n)).unwrap();
            let tick = reduce(Event::TimerTick { tick: 99 }, idx(i, n)).unwrap();
            assert_eq!(play, tick);
        }
    }

    #[test]
    fn test_slider_overrides_current() {
        let n = 1200;
        for current in [0, 499, 500, 501, 1199] {
            let next = reduce(Event::SliderMoved { index: 500 }, idx(current, n)).unwrap();
            assert_eq!(next.get(), 500);
        }
    }

    #[test]
    fn test_slider_out_of_range_is_rejected() {
        let err = reduce(Event::SliderMoved { index: 3 }, idx(0, 3)).unwrap_err();
        assert_eq!(err.index, 3);
        assert_eq!(err.column_count, 3);
    }

    #[test]
    fn test_page_loaded_resets() {
        assert_eq!(reduce(Event::PageLoaded, idx(8, 10)).unwrap().get(), 0);
    }

    #[test]
    fn test_event_wire_format() {
        let ev: Event = serde_json::from_str(r#"{"source":"slider_moved","index":42}"#).unwrap();
        assert_eq!(ev, Event::SliderMoved { index: 42 });

        let ev: Event = serde_json::from_str(r#"{"source":"play_clicked"}"#).unwrap();
        assert_eq!(ev, Event::PlayClicked);

        let json = serde_json::to_string(&Event::TimerTick { tick: 3 }).unwrap();
        assert_eq!(json, r#"{"source":"timer_tick","tick":3}"#);
        assert_eq!(Event::TimerTick { tick: 3 }.name(), "timer_tick");
    }
}
