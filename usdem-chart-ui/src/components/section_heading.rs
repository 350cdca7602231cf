//! Centered section heading.

use dioxus::prelude::*;
use usdem_view::Theme;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeadingProps {
    pub title: String,
    pub theme: Theme,
    /// Render as the page title (`h1`) instead of a section title (`h2`)
    #[props(default = false)]
    pub page_title: bool,
}

/// Heading styled with the theme's title color.
#[component]
pub fn SectionHeading(props: SectionHeadingProps) -> Element {
    let style = props.theme.heading_style();

    rsx! {
        if props.page_title {
            h1 { style: "{style}", "{props.title}" }
        } else {
            h2 { style: "{style} margin-top: 28px;", "{props.title}" }
        }
    }
}
