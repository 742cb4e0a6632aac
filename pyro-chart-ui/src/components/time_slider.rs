//! Time-step slider.

use crate::state::AppState;
use dioxus::prelude::*;
use pyro_playback::Event as PlaybackEvent;

const MARKS_LIST_ID: &str = "time-step-marks";

/// Range input over every time step, with tick marks and an always-visible value.
///
/// Moving the slider sends `SliderMoved`; the displayed value follows the
/// latest frame, so auto-play moves the thumb too.
#[component]
pub fn TimeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let Some(slider) = state.update_loop.read().as_ref().map(|ul| ul.slider()) else {
        return rsx! {};
    };
    let value = state
        .frame
        .read()
        .as_ref()
        .map(|f| f.index.get())
        .unwrap_or(slider.min);

    let on_input = move |evt: Event<FormData>| {
        if let Ok(index) = evt.value().parse::<usize>() {
            state.dispatch(PlaybackEvent::SliderMoved { index });
        }
    };

    let span = (slider.max - slider.min).max(1) as f64;
    let mark_labels: Vec<(usize, String)> = slider
        .marks
        .iter()
        .map(|&mark| {
            let left = (mark - slider.min) as f64 / span * 100.0;
            (mark, format!("position: absolute; left: {left:.2}%; transform: translateX(-50%);"))
        })
        .collect();

    rsx! {
        div {
            style: "margin: 12px 0; padding: 0 8px;",
            input {
                r#type: "range",
                min: "{slider.min}",
                max: "{slider.max}",
                step: "{slider.step}",
                value: "{value}",
                list: MARKS_LIST_ID,
                style: "width: 100%;",
                oninput: on_input,
            }
            datalist {
                id: MARKS_LIST_ID,
                for mark in slider.marks.iter().copied() {
                    option { key: "{mark}", value: "{mark}" }
                }
            }
            div {
                style: "position: relative; height: 16px; font-size: 11px; color: #666;",
                for (mark, label_style) in mark_labels {
                    span {
                        key: "{mark}",
                        style: "{label_style}",
                        "{mark}"
                    }
                }
            }
            if slider.tooltip_always_visible {
                div {
                    style: "text-align: center; margin-top: 6px; font-size: 12px;",
                    span {
                        style: "padding: 2px 8px; background: #333; color: #fff; border-radius: 3px;",
                        "{value}"
                    }
                }
            }
        }
    }
}
