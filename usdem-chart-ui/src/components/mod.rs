//! Reusable Dioxus RSX components for the dashboard apps.

mod chart_container;
mod dashboard;
mod error_display;
mod loading_spinner;
mod section_heading;
mod state_selector;

pub use chart_container::ChartContainer;
pub use dashboard::Dashboard;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use section_heading::SectionHeading;
pub use state_selector::StateSelector;
