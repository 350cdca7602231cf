//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Each page session gets its own `AppState`, so the selection is never
//! shared between sessions.

use dioxus::prelude::*;
use usdem_db::Dataset;

/// Shared application state for the dashboard apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected state name
    pub selected_state: Signal<String>,
    /// Selectable state names, in dataset order
    pub state_names: Signal<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_state: Signal::new(String::new()),
            state_names: Signal::new(Vec::new()),
        }
    }

    /// Record a fatal load or render error and stop showing the spinner.
    pub fn fail(&mut self, message: String) {
        log::error!("{}", message);
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
