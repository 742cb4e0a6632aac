//! Placeholder while the datasets are parsed.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(
    #[props(default = "Parsing simulation output...".to_string())] message: String,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 10px; padding: 48px 0; color: #555; font-size: 14px;",
            progress { style: "width: 160px; accent-color: #3fb817;" }
            "{message}"
        }
    }
}
