//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The selected time step lives inside the `UpdateLoop`; every control goes
//! through [`AppState::dispatch`] so there is exactly one place where it changes.

use crate::js_bridge;
use dioxus::prelude::*;
use pyro_playback::{Event as PlaybackEvent, Frame, TickClock, UpdateLoop};

/// Shared application state for the pyrolysis dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Reducer and datasets (None until loaded)
    pub update_loop: Signal<Option<UpdateLoop>>,
    /// Latest frame produced by the reducer
    pub frame: Signal<Option<Frame>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Whether timer ticks are forwarded to the reducer
    pub playing: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            update_loop: Signal::new(None),
            frame: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            playing: Signal::new(false),
        }
    }

    /// Feed one event through the reducer and publish the resulting frame.
    pub fn dispatch(&mut self, event: PlaybackEvent) {
        let result = {
            let mut update_loop = self.update_loop.write();
            match update_loop.as_mut() {
                Some(ul) => ul.dispatch(event),
                None => {
                    log::debug!("Ignoring {} before data is loaded", event.name());
                    return;
                }
            }
        };

        match result {
            Ok(frame) => self.frame.set(Some(frame)),
            Err(e) => log::warn!("Rejected {}: {}", event.name(), e),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive auto-play: sleep one period, then forward the latest tick while playing.
///
/// Ticks that elapse while the tab is busy are coalesced by [`TickClock`], so a
/// slow render never builds up a backlog.
pub fn use_playback_timer(state: AppState, period_ms: u32) {
    use_future(move || async move {
        let mut state = state;
        let mut clock = TickClock::start(period_ms, js_bridge::now_ms());
        loop {
            js_bridge::sleep_ms(period_ms).await;
            let Some(tick) = clock.poll(js_bridge::now_ms()) else {
                continue;
            };
            if *state.playing.peek() {
                state.dispatch(PlaybackEvent::TimerTick { tick });
            }
        }
    });
}
