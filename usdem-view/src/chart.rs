//! Chart regions and the decoration step that turns views into chart specs.
//!
//! A [`ChartSpec`] is what the JS bridge hands to D3: the view data, copied
//! verbatim, plus a config holding titles, axis labels and the theme.

use crate::theme::Theme;
use crate::views::{DerivedViews, LabeledValue};
use serde::Serialize;
use usdem_db::ScatterPoint;

/// Which D3 renderer draws a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Scatter,
}

/// A chart slot on the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartRegion {
    EthnicitySplit,
    TotalPopulation,
    RaceDistribution,
    RacePercentage,
    CrossStateScatter,
}

impl ChartRegion {
    /// Every region in page order.
    pub const ALL: [ChartRegion; 5] = [
        ChartRegion::EthnicitySplit,
        ChartRegion::TotalPopulation,
        ChartRegion::RaceDistribution,
        ChartRegion::RacePercentage,
        ChartRegion::CrossStateScatter,
    ];

    /// DOM id of the container D3 renders into.
    pub fn id(self) -> &'static str {
        match self {
            Self::EthnicitySplit => "pie-chart",
            Self::TotalPopulation => "bar-chart",
            Self::RaceDistribution => "race-bar-chart",
            Self::RacePercentage => "race-percentage-bar-chart",
            Self::CrossStateScatter => "scatter-plot",
        }
    }

    pub fn kind(self) -> ChartKind {
        match self {
            Self::EthnicitySplit => ChartKind::Pie,
            Self::TotalPopulation | Self::RaceDistribution | Self::RacePercentage => {
                ChartKind::Bar
            }
            Self::CrossStateScatter => ChartKind::Scatter,
        }
    }

    /// Whether the region compares all states rather than the selected one.
    pub fn is_cross_state(self) -> bool {
        matches!(self, Self::CrossStateScatter)
    }

    /// Minimum container height in pixels.
    pub fn min_height(self) -> u32 {
        if self.is_cross_state() {
            400
        } else {
            450
        }
    }
}

/// The data half of a chart spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartData {
    /// Pie slices or bars.
    Categories(Vec<LabeledValue>),
    /// Scatter points.
    Points(Vec<ScatterPoint>),
}

/// The presentation half of a chart spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    /// Field shown as the tooltip heading (scatter only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_label: Option<String>,
    pub theme: Theme,
}

/// One chart ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: &'static str,
    pub kind: ChartKind,
    pub data: ChartData,
    pub config: ChartConfig,
}

impl ChartSpec {
    pub fn data_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.data)
    }

    pub fn config_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.config)
    }
}

/// Decorate `views` with `theme`, producing one spec per region in `regions`.
///
/// The data of each spec is a copy of the matching view. Only titles, axis
/// labels and styling are added.
pub fn decorate(views: &DerivedViews, theme: &Theme, regions: &[ChartRegion]) -> Vec<ChartSpec> {
    regions
        .iter()
        .map(|&region| {
            let (title, x_label, y_label, data) = match region {
                ChartRegion::EthnicitySplit => (
                    format!("Hispanic vs Non-Hispanic Population in {}", views.state),
                    None,
                    None,
                    ChartData::Categories(views.ethnicity_split.clone()),
                ),
                ChartRegion::TotalPopulation => (
                    "Total Population".to_string(),
                    Some("State"),
                    Some("Population"),
                    ChartData::Categories(vec![views.total_population.clone()]),
                ),
                ChartRegion::RaceDistribution => (
                    format!("Population Distribution by Race in {}", views.state),
                    Some("Race"),
                    Some("Population"),
                    ChartData::Categories(views.race_distribution.clone()),
                ),
                ChartRegion::RacePercentage => (
                    format!("Population Percentage by Race in {}", views.state),
                    Some("Race"),
                    Some("Percentage"),
                    ChartData::Categories(views.race_percentage_distribution.clone()),
                ),
                ChartRegion::CrossStateScatter => (
                    "Total Population vs. Percentage of White Population (All States)"
                        .to_string(),
                    Some("Percentage of White Population"),
                    Some("Total Population"),
                    ChartData::Points(views.cross_state_scatter.clone()),
                ),
            };

            ChartSpec {
                id: region.id(),
                kind: region.kind(),
                data,
                config: ChartConfig {
                    title,
                    x_label: x_label.map(str::to_string),
                    y_label: y_label.map(str::to_string),
                    hover_label: region.is_cross_state().then(|| "state".to_string()),
                    theme: theme.clone(),
                },
            }
        })
        .collect()
}
