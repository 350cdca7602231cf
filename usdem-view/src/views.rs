//! Selection to derived views.
//!
//! [`compute_views`] is the only logic between the selector and the charts.
//! It reads the dataset, never writes it, and keeps no state between calls,
//! so the same `(dataset, state)` pair always yields the same views.

use crate::race::RaceCategory;
use serde::Serialize;
use thiserror::Error;
use usdem_db::{Dataset, DatasetError, ScatterPoint};

pub const HISPANIC_LABEL: &str = "Hispanic";
pub const NON_HISPANIC_LABEL: &str = "Non-Hispanic";

/// A single category/value pair: one pie slice or one bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Everything the dashboard draws for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedViews {
    /// The selected state's name.
    pub state: String,
    /// `[Hispanic, Non-Hispanic]` head counts.
    pub ethnicity_split: Vec<LabeledValue>,
    /// `(state name, total population)`.
    pub total_population: LabeledValue,
    /// Head count per race, in [`RaceCategory::ALL`] order.
    pub race_distribution: Vec<LabeledValue>,
    /// Percentage per race, in [`RaceCategory::ALL`] order.
    pub race_percentage_distribution: Vec<LabeledValue>,
    /// Every state in dataset order. Does not depend on the selection.
    pub cross_state_scatter: Vec<ScatterPoint>,
}

/// Failure to compute views for a selection.
#[derive(Error, Debug)]
pub enum ViewError {
    /// The selection names no record in the dataset
    #[error("No record for state: {0}")]
    StateNotFound(String),

    /// The dataset could not be queried
    #[error(transparent)]
    Dataset(DatasetError),
}

impl From<DatasetError> for ViewError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::StateNotFound(state) => Self::StateNotFound(state),
            other => Self::Dataset(other),
        }
    }
}

/// Compute all five views for `selected_state`.
///
/// The lookup is an exact name match. A name that is not in the dataset
/// yields [`ViewError::StateNotFound`]; there is no fallback record. Either
/// every view is returned or none is.
pub fn compute_views(dataset: &Dataset, selected_state: &str) -> Result<DerivedViews, ViewError> {
    let record = dataset.query_state(selected_state)?;
    let cross_state_scatter = dataset.query_scatter_points()?;

    let ethnicity_split = vec![
        LabeledValue::new(HISPANIC_LABEL, record.hispanic),
        LabeledValue::new(NON_HISPANIC_LABEL, record.non_hispanic),
    ];

    let total_population = LabeledValue::new(record.state.clone(), record.total);

    let race_distribution = RaceCategory::ALL
        .iter()
        .map(|c| LabeledValue::new(c.total_column(), c.total(&record)))
        .collect();

    let race_percentage_distribution = RaceCategory::ALL
        .iter()
        .map(|c| LabeledValue::new(c.percentage_column(), c.percentage(&record)))
        .collect();

    log::debug!("[USDEM] views: computed views for {}", record.state);

    Ok(DerivedViews {
        state: record.state,
        ethnicity_split,
        total_population,
        race_distribution,
        race_percentage_distribution,
        cross_state_scatter,
    })
}
