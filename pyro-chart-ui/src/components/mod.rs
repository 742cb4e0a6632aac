//! Reusable Dioxus RSX components for the pyrolysis dashboard.

mod chart_panel;
mod error_display;
mod loading_spinner;
mod page_header;
mod play_button;
mod time_slider;

pub use chart_panel::ChartPanel;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use page_header::PageHeader;
pub use play_button::PlayButton;
pub use time_slider::TimeSlider;
