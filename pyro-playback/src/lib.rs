//! Time-step playback for the pyrolysis dashboard.
//!
//! This crate holds the one piece of behaviour in the dashboard: turning
//! slider, play-button and timer events into a new selected time step and a
//! fresh set of chart descriptions. It has no UI dependency and is shared by
//! the Dioxus frontend and the native HTTP server.
//!
//! - `event`: tagged input events and the `reduce` function
//! - `chart`: `build_chart` / `build_heatmap` and their serializable output
//! - `panels`: density and kinetic-rate panel presets
//! - `slider`: slider range and tick marks
//! - `timer`: wall-clock tick counter with coalescing
//! - `update_loop`: owns the selected index and produces frames
//!
//! ```rust
//! use pyro_data::loader::parse_csv;
//! use pyro_playback::{Event, UpdateLoop};
//! use std::sync::Arc;
//!
//! let rho = Arc::new(parse_csv("rho", "a,b,c\n0.01,0.02,0.03\n").unwrap());
//! let kin = Arc::new(parse_csv("kin", "a,b,c\n1e-6,2e-6,3e-6\n").unwrap());
//! let mut ul = UpdateLoop::pyrolysis(rho, kin).unwrap();
//!
//! let frame = ul.dispatch(Event::PlayClicked).unwrap();
//! assert_eq!(frame.index.get(), 1);
//! assert_eq!(frame.charts[0].y, vec![0.02]);
//! ```

pub mod chart;
pub mod event;
pub mod panels;
pub mod slider;
pub mod timer;
pub mod update_loop;

pub use chart::{build_chart, build_heatmap, ChartConfig, ChartDescription, HeatmapConfig, HeatmapDescription};
pub use event::{reduce, Event};
pub use slider::SliderConfig;
pub use timer::{TickClock, TIMER_PERIOD_MS};
pub use update_loop::{Frame, Panel, UpdateLoop};
