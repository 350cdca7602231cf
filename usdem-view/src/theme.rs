//! Presentation themes.
//!
//! A theme only carries colors and fonts. Applying one never changes any
//! label or value in the views it decorates.

use serde::Serialize;

/// Colors and fonts applied to the page and to every chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: &'static str,
    /// Page background behind the charts.
    pub page_background: &'static str,
    /// Chart background outside the plot area.
    pub paper_background: &'static str,
    /// Background of the plot area itself.
    pub plot_background: &'static str,
    pub font_family: &'static str,
    pub text_color: &'static str,
    pub title_color: &'static str,
    pub grid_color: &'static str,
    /// Categorical colors, cycled over pie slices and bars.
    pub palette: &'static [&'static str],
}

impl Theme {
    /// Light theme with Arial text.
    pub fn plain() -> Self {
        Self {
            name: "plain",
            page_background: "#FFFFFF",
            paper_background: "#FFFFFF",
            plot_background: "#E5ECF6",
            font_family: "Arial, sans-serif",
            text_color: "#2A3F5F",
            title_color: "#333333",
            grid_color: "#FFFFFF",
            palette: &["#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A"],
        }
    }

    /// Dark theme with light cyan text.
    pub fn dark() -> Self {
        Self {
            name: "dark",
            page_background: "#111111",
            paper_background: "#1E1E1E",
            plot_background: "#1E1E1E",
            font_family: "'Segoe UI', Roboto, Helvetica, sans-serif",
            text_color: "#7FDBFF",
            title_color: "#FFFFFF",
            grid_color: "#333333",
            palette: &["#00BFFF", "#FF6F61", "#9ACD32", "#FFD700", "#DA70D6"],
        }
    }

    /// Inline CSS for the page's outermost container.
    pub fn page_style(&self) -> String {
        format!(
            "padding: 20px; min-height: 100vh; background: {}; color: {}; font-family: {};",
            self.page_background, self.text_color, self.font_family
        )
    }

    /// Inline CSS for page headings.
    pub fn heading_style(&self) -> String {
        format!("text-align: center; color: {};", self.title_color)
    }
}
