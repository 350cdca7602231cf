//! View model for the US state demographics dashboard.
//!
//! This crate turns a loaded [`usdem_db::Dataset`] and a selected state name
//! into the data behind every chart, then decorates that data with a theme
//! to produce chart specs for D3.js.
//!
//! - `race`: the fixed race category order used by the race charts
//! - `views`: [`compute_views`], the selection to derived views mapping
//! - `theme`: plain and dark presentation themes
//! - `chart`: chart regions, specs and the [`decorate`] transform
//! - `variant`: the two dashboard variants and what each one shows

pub mod chart;
pub mod race;
pub mod theme;
pub mod variant;
pub mod views;

pub use chart::{decorate, ChartConfig, ChartData, ChartKind, ChartRegion, ChartSpec};
pub use race::RaceCategory;
pub use theme::Theme;
pub use variant::Variant;
pub use views::{compute_views, DerivedViews, LabeledValue, ViewError};

#[cfg(test)]
pub(crate) mod test_data {
    use usdem_db::Dataset;

    pub const SAMPLE_JSON: &str = r#"[
        {
            "State": "Texas", "Total": 29000000, "Hispanic": 11000000, "NonHispanic": 18000000,
            "WhiteTotal": 15000000, "BlackTotal": 3500000, "IndianTotal": 200000,
            "AsianTotal": 1500000, "OtherTotal": 8800000,
            "WhiteTotalPerc": 51.7, "BlackTotalPerc": 12.1, "IndianTotalPerc": 0.7,
            "AsianTotalPerc": 5.2, "OtherTotalPerc": 30.3
        },
        {
            "State": "Vermont", "Total": 624340, "Hispanic": 12487, "NonHispanic": 611853,
            "WhiteTotal": 586255, "BlackTotal": 7492, "IndianTotal": 1873,
            "AsianTotal": 11238, "OtherTotal": 17482,
            "WhiteTotalPerc": 93.9, "BlackTotalPerc": 1.2, "IndianTotalPerc": 0.3,
            "AsianTotalPerc": 1.8, "OtherTotalPerc": 2.8
        },
        {
            "State": "Hawaii", "Total": 1420074, "Hispanic": 151948, "NonHispanic": 1268126,
            "WhiteTotal": 357859, "BlackTotal": 26981, "IndianTotal": 4260,
            "AsianTotal": 536788, "OtherTotal": 494186,
            "WhiteTotalPerc": 25.2, "BlackTotalPerc": 1.9, "IndianTotalPerc": 0.3,
            "AsianTotalPerc": 37.8, "OtherTotalPerc": 34.8
        }
    ]"#;

    pub fn sample_dataset() -> Dataset {
        Dataset::from_json(SAMPLE_JSON).unwrap()
    }
}
