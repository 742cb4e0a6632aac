//! Play/pause control for auto-play.

use crate::state::AppState;
use dioxus::prelude::*;
use pyro_playback::Event as PlaybackEvent;

/// Starts auto-play (advancing one step immediately) or pauses it.
///
/// Pausing only stops timer ticks from reaching the reducer; the selected
/// time step stays where it is.
#[component]
pub fn PlayButton() -> Element {
    let mut state = use_context::<AppState>();
    let playing = (state.playing)();
    let disabled = state.update_loop.read().is_none();

    let on_click = move |_| {
        if *state.playing.peek() {
            state.playing.set(false);
        } else {
            state.dispatch(PlaybackEvent::PlayClicked);
            state.playing.set(true);
        }
    };

    rsx! {
        button {
            style: "padding: 6px 20px; font-size: 14px; border: 1px solid #3fb817; background: #FFFFFF; color: #2b7d10; border-radius: 4px; cursor: pointer;",
            disabled: disabled,
            onclick: on_click,
            if playing { "Pause" } else { "Play" }
        }
    }
}
