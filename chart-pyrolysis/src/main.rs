//! Wood Pyrolysis Dynamics
//!
//! Steps through precomputed simulation output of a burning wood stick:
//! charcoal density and kinetic reaction rate along the stick, one time step
//! at a time, plus a heatmap of the density over the whole run.
//!
//! Data flow:
//! 1. `build.rs` copies `Res_rho_char.csv` and `Res_R_kin.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds both CSVs into the WASM binary.
//! 3. On mount: parse both into datasets, build the `UpdateLoop`, send `PageLoaded`.
//! 4. Slider, Play button and the 100 ms timer each send one event; every
//!    new frame is pushed to D3.js.

use pyro_chart_ui::components::{
    ChartPanel, ErrorDisplay, LoadingSpinner, PageHeader, PlayButton, TimeSlider,
};
use pyro_chart_ui::js_bridge;
use pyro_chart_ui::state::{use_playback_timer, AppState};
use pyro_data::loader::parse_csv;
use pyro_playback::panels::{DENSITY_CHART_ID, HEATMAP_ID, KINETIC_CHART_ID};
use pyro_playback::{Event as PlaybackEvent, UpdateLoop, TIMER_PERIOD_MS};
use dioxus::prelude::*;
use std::sync::Arc;

const RHO_CHAR_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/Res_rho_char.csv"));
const R_KIN_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/Res_R_kin.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("pyrolysis-root"))
        .launch(App);
}

/// Parse the embedded CSVs into the dashboard's update loop.
fn load_dashboard() -> Result<UpdateLoop, String> {
    let rho_char = parse_csv("Res_rho_char", RHO_CHAR_CSV)
        .map_err(|e| format!("Failed to load charcoal density data: {}", e))?;
    let r_kin = parse_csv("Res_R_kin", R_KIN_CSV)
        .map_err(|e| format!("Failed to load kinetic rate data: {}", e))?;

    log::info!(
        "Loaded {} time steps x {} positions",
        rho_char.column_count(),
        rho_char.row_count()
    );

    UpdateLoop::pyrolysis(Arc::new(rho_char), Arc::new(r_kin)).map_err(|e| e.to_string())
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    use_playback_timer(state, TIMER_PERIOD_MS);

    // ─── Effect 1: Parse CSVs once on mount ───
    use_effect(move || {
        match load_dashboard() {
            Ok(update_loop) => {
                let heatmap = update_loop.heatmap();
                state.update_loop.set(Some(update_loop));
                state.dispatch(PlaybackEvent::PageLoaded);

                js_bridge::init_charts();
                if let Some(heatmap) = heatmap {
                    match serde_json::to_string(&heatmap) {
                        Ok(json) => js_bridge::render_heatmap(HEATMAP_ID, &json),
                        Err(e) => log::error!("Failed to serialize heatmap: {}", e),
                    }
                }
            }
            Err(e) => {
                log::error!("{}", e);
                state.error_msg.set(Some(e));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: Push every new frame to D3 ───
    use_effect(move || {
        let frame = state.frame.read();
        let Some(frame) = frame.as_ref() else {
            return;
        };

        for chart in &frame.charts {
            match serde_json::to_string(chart) {
                Ok(json) => js_bridge::render_line_chart(&chart.id, &json),
                Err(e) => log::error!("Failed to serialize chart {}: {}", chart.id, e),
            }
        }
        js_bridge::mark_heatmap_column(HEATMAP_ID, frame.index.get());
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: Lato, system-ui, -apple-system, sans-serif;",

            PageHeader {
                emoji: "🪵 🔥 🪵".to_string(),
                title: "Wood pyrolysis dynamics".to_string(),
                description: "We simulate the dynamics of a wood stick in time.".to_string(),
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay {
                    message: err.clone(),
                    hint: "Check Res_rho_char.csv and Res_R_kin.csv in the fixtures directory.".to_string(),
                }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if state.update_loop.read().is_some() {
                p {
                    class: "body",
                    "We can select a specific value of time using the slider below the plots."
                }

                ChartPanel { id: DENSITY_CHART_ID.to_string(), width: "50%".to_string() }
                ChartPanel { id: KINETIC_CHART_ID.to_string(), width: "50%".to_string() }

                p { class: "body", "Select the desired time." }

                TimeSlider {}

                div {
                    style: "text-align: center; margin: 8px 0 16px 0;",
                    PlayButton {}
                }

                p {
                    class: "body",
                    "We dynamically plot the evolution of the variables of interest for each slice of time."
                }

                ChartPanel { id: HEATMAP_ID.to_string(), min_height: 360 }
            }
        }
    }
}
