//! Placeholder shown while the embedded data file is parsed.

use dioxus::prelude::*;
use usdem_view::Theme;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    pub theme: Theme,
}

pub fn loading_style(theme: &Theme) -> String {
    format!(
        "display: flex; justify-content: center; align-items: center; padding: 40px; color: {}; font-family: {};",
        theme.text_color, theme.font_family
    )
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    let style = loading_style(&props.theme);

    rsx! {
        div {
            style: "{style}",
            "Loading state data..."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_text_uses_theme_color() {
        assert!(loading_style(&Theme::dark()).contains("color: #7FDBFF;"));
        assert!(loading_style(&Theme::plain()).contains("color: #2A3F5F;"));
    }
}
