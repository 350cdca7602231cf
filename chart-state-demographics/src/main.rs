//! US State Demographics
//!
//! Displays the selected state's Hispanic/non-Hispanic split, total
//! population and race distribution (counts and percentages), plus a
//! scatter plot comparing every state's total population against its white
//! population percentage.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/data.json` into `OUT_DIR`.
//! 2. `include_str!` embeds the JSON into the WASM binary.
//! 3. On mount, the JSON is loaded into an in-memory SQLite dataset.
//! 4. Each selector change recomputes the views and re-renders all charts.

use dioxus::prelude::*;
use usdem_chart_ui::components::Dashboard;
use usdem_view::Variant;

/// State demographic records.
const DATA_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/data.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("[USDEM] starting plain dashboard");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("state-demographics-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Dashboard { variant: Variant::Plain, data_json: DATA_JSON }
    }
}
