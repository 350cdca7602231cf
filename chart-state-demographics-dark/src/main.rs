//! US State Demographics, dark theme
//!
//! Same data and interaction as `chart-state-demographics`, styled dark and
//! limited to the four charts about the selected state.

use dioxus::prelude::*;
use usdem_chart_ui::components::Dashboard;
use usdem_view::Variant;

/// State demographic records.
const DATA_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/data.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("[USDEM] starting dark dashboard");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("state-demographics-dark-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Dashboard { variant: Variant::Dark, data_json: DATA_JSON }
    }
}
