//! The dashboard page shared by both app variants.
//!
//! Data flow:
//! 1. On mount, the embedded JSON is loaded into a [`Dataset`]. A load
//!    failure replaces the page with an error and nothing else happens.
//! 2. State names populate the selector; the first one is selected.
//! 3. Every change of `selected_state` recomputes all views, decorates them
//!    for the variant and renders each chart through the JS bridge.

use crate::components::{ChartContainer, ErrorDisplay, LoadingSpinner, SectionHeading, StateSelector};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use usdem_db::{Dataset, DEFAULT_PERCENT_TOLERANCE};
use usdem_view::{ChartRegion, Variant};

#[derive(Props, Clone, PartialEq)]
pub struct DashboardProps {
    /// Which theme and chart set to show
    pub variant: Variant,
    /// Raw JSON data file, typically embedded with `include_str!`
    pub data_json: &'static str,
}

#[component]
pub fn Dashboard(props: DashboardProps) -> Element {
    let mut state = use_context_provider(AppState::new);
    let variant = props.variant;
    let data_json = props.data_json;

    // Load the dataset on mount
    use_effect(move || match Dataset::from_json(data_json) {
        Ok(dataset) => {
            js_bridge::set_page_title(variant.page_title());

            let names = match dataset.state_names() {
                Ok(names) => names,
                Err(e) => {
                    state.fail(format!("Failed to read state names: {}", e));
                    return;
                }
            };

            match dataset.consistency_issues(DEFAULT_PERCENT_TOLERANCE) {
                Ok(issues) => {
                    for issue in &issues {
                        log::warn!("[USDEM] data: {}", issue);
                    }
                }
                Err(e) => log::warn!("[USDEM] consistency check failed: {}", e),
            }

            // Default to the first record
            if let Some(first) = names.first() {
                state.selected_state.set(first.clone());
            }
            state.state_names.set(names);
            state.dataset.set(Some(dataset));
            state.loading.set(false);
        }
        Err(e) => state.fail(format!("Failed to load state data: {}", e)),
    });

    // Recompute and re-render every chart whenever the selection changes
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            return;
        }

        let dataset = match &*state.dataset.read() {
            Some(dataset) => dataset.clone(),
            None => return,
        };

        let selected = (state.selected_state)();
        if selected.is_empty() {
            return;
        }

        js_bridge::init_charts();

        match variant.render(&dataset, &selected) {
            Ok(specs) => {
                log::info!("[USDEM] rendering {} charts for {}", specs.len(), selected);
                for spec in &specs {
                    js_bridge::render_chart(spec);
                }
            }
            Err(e) => {
                // Clear everything rather than leave charts from the previous selection
                log::error!("[USDEM] failed to compute views for {}: {}", selected, e);
                for region in variant.regions() {
                    js_bridge::destroy_chart(region.id());
                }
            }
        }
    });

    let theme = variant.theme();
    let page_style = theme.page_style();
    let per_state: Vec<ChartRegion> = variant
        .regions()
        .iter()
        .copied()
        .filter(|r| !r.is_cross_state())
        .collect();
    let cross_state: Vec<ChartRegion> = variant
        .regions()
        .iter()
        .copied()
        .filter(|r| r.is_cross_state())
        .collect();

    rsx! {
        div {
            style: "{page_style}",

            SectionHeading {
                title: variant.page_title().to_string(),
                theme: theme.clone(),
                page_title: true,
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err, theme: theme.clone() }
            } else if (state.loading)() {
                LoadingSpinner { theme: theme.clone() }
            } else {
                StateSelector { theme: theme.clone() }

                SectionHeading {
                    title: variant.selection_heading().to_string(),
                    theme: theme.clone(),
                }

                div {
                    style: "display: flex; flex-wrap: wrap; justify-content: space-between;",
                    for region in per_state.iter() {
                        ChartContainer {
                            id: region.id().to_string(),
                            loading: false,
                            min_height: region.min_height(),
                            width_percent: 48,
                        }
                    }
                }

                if let Some(heading) = variant.comparison_heading() {
                    SectionHeading {
                        title: heading.to_string(),
                        theme: theme.clone(),
                    }
                    for region in cross_state.iter() {
                        ChartContainer {
                            id: region.id().to_string(),
                            loading: false,
                            min_height: region.min_height(),
                        }
                    }
                }
            }
        }
    }
}
