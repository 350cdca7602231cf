//! The two dashboard variants.
//!
//! Both variants run the same [`compute_views`](crate::compute_views); a
//! variant only picks a theme, the page headings and which chart regions
//! are on the page.

use crate::chart::{decorate, ChartRegion, ChartSpec};
use crate::theme::Theme;
use crate::views::{compute_views, DerivedViews, ViewError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use usdem_db::Dataset;

/// Regions on the dark page. The cross-state scatter is left out.
const DARK_REGIONS: [ChartRegion; 4] = [
    ChartRegion::EthnicitySplit,
    ChartRegion::TotalPopulation,
    ChartRegion::RaceDistribution,
    ChartRegion::RacePercentage,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Light page with all five charts.
    #[default]
    Plain,
    /// Dark page with the four per-state charts.
    Dark,
}

impl Variant {
    pub fn theme(self) -> Theme {
        match self {
            Self::Plain => Theme::plain(),
            Self::Dark => Theme::dark(),
        }
    }

    /// Chart regions on the page, in page order.
    pub fn regions(self) -> &'static [ChartRegion] {
        match self {
            Self::Plain => &ChartRegion::ALL,
            Self::Dark => &DARK_REGIONS,
        }
    }

    pub fn page_title(self) -> &'static str {
        "US State Demographics"
    }

    /// Heading above the per-state charts.
    pub fn selection_heading(self) -> &'static str {
        "Demographic Distribution for Selected State"
    }

    /// Heading above the cross-state charts, if the variant shows any.
    pub fn comparison_heading(self) -> Option<&'static str> {
        match self {
            Self::Plain => Some("Overall States Population Analysis"),
            Self::Dark => None,
        }
    }

    /// Decorate already computed views for this variant's page.
    pub fn chart_specs(self, views: &DerivedViews) -> Vec<ChartSpec> {
        decorate(views, &self.theme(), self.regions())
    }

    /// Compute and decorate in one step.
    pub fn render(self, dataset: &Dataset, selected_state: &str) -> Result<Vec<ChartSpec>, ViewError> {
        let views = compute_views(dataset, selected_state)?;
        Ok(self.chart_specs(&views))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "dark" | "themed" => Ok(Self::Dark),
            other => Err(format!("unknown variant '{}', expected 'plain' or 'dark'", other)),
        }
    }
}
