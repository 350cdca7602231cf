//! Fatal error banner shown in place of the dashboard.

use dioxus::prelude::*;
use usdem_view::Theme;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    pub theme: Theme,
}

/// Inline CSS for the error box under `theme`.
pub fn error_style(theme: &Theme) -> String {
    format!(
        "padding: 12px 16px; margin: 8px 0; background: {}; color: {}; border-radius: 4px; border: 1px solid {}; border-left: 4px solid {};",
        theme.paper_background, theme.text_color, theme.grid_color, theme.title_color
    )
}

/// Displays a load or render error on the page background of the variant.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let style = error_style(&props.theme);
    let label_style = format!("color: {};", props.theme.title_color);

    rsx! {
        div {
            style: "{style}",
            strong { style: "{label_style}", "Could not show the dashboard: " }
            "{props.message}"
        }
    }
}
