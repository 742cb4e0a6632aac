//! Banner for load failures.

use dioxus::prelude::*;

/// Replaces the charts when the simulation data could not be loaded.
///
/// `hint` names what to check (usually the CSV paths); it is omitted when empty.
#[component]
pub fn ErrorDisplay(
    message: String,
    #[props(default = String::new())] hint: String,
) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "margin: 12px 0; padding: 10px 14px; border-left: 4px solid #b00020; background: #fdecea; color: #5f2120; font-size: 14px;",
            div { style: "font-weight: 600; margin-bottom: 2px;", "Could not load the simulation" }
            code { style: "white-space: pre-wrap;", "{message}" }
            if !hint.is_empty() {
                div { style: "margin-top: 6px; color: #7a4a49; font-size: 12px;", "{hint}" }
            }
        }
    }
}
