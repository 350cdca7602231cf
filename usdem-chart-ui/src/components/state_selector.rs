//! Dropdown selector for choosing a state.

use crate::state::AppState;
use dioxus::prelude::*;
use usdem_view::Theme;

#[derive(Props, Clone, PartialEq)]
pub struct StateSelectorProps {
    pub theme: Theme,
}

/// State dropdown selector.
///
/// Reads the state names from AppState and updates `selected_state` on change.
/// There is no empty option, so exactly one state is always selected.
#[component]
pub fn StateSelector(props: StateSelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let names = state.state_names.read().clone();
    let selected = (state.selected_state)();
    let select_style = format!(
        "width: 50%; padding: 6px 8px; font-size: 14px; background: {}; color: {}; border: 1px solid {}; border-radius: 4px;",
        props.theme.paper_background, props.theme.text_color, props.theme.grid_color
    );

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        log::debug!("[USDEM] selector: {}", value);
        state.selected_state.set(value);
    };

    rsx! {
        div {
            style: "margin: 20px 0; display: flex; justify-content: center;",
            select {
                id: "state-dropdown",
                style: "{select_style}",
                onchange: on_change,
                for name in names.iter() {
                    option {
                        value: "{name}",
                        selected: *name == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
