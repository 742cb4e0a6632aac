//! Shared Dioxus components and D3.js bridge for the pyrolysis dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart functions and browser timers
//! - `state`: Reactive AppState with Dioxus Signals, plus the auto-play timer hook
//! - `components`: Reusable RSX components (slider, play button, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
