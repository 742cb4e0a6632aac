//! Chart panel container that D3 renders into.

use dioxus::prelude::*;

/// Props for ChartPanel
#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// DOM id of the container (must match the chart description's `id`)
    pub id: String,
    /// CSS width, e.g. "50%" for side-by-side panels
    #[props(default = "100%".to_string())]
    pub width: String,
    /// Minimum height in pixels, reserved before the first frame arrives
    #[props(default = 320)]
    pub min_height: u32,
}

/// An inline-block panel holding one D3 chart.
#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let style = format!(
        "width: {}; min-height: {}px; display: inline-block; vertical-align: top; box-sizing: border-box; padding: 4px;",
        props.width, props.min_height
    );

    rsx! {
        div {
            class: "grafico",
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
