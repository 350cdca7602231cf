//! Record and query result model structs.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend. `StateRecord` also derives `Deserialize`;
//! its serialized field names match the columns of the source data file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Demographic statistics for a single US state.
///
/// Counts are people; `*_perc` fields are percentages of `total` (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StateRecord {
    /// State name, the record's key.
    pub state: String,
    pub total: f64,
    pub hispanic: f64,
    pub non_hispanic: f64,
    pub white_total: f64,
    pub black_total: f64,
    pub indian_total: f64,
    pub asian_total: f64,
    pub other_total: f64,
    pub white_total_perc: f64,
    pub black_total_perc: f64,
    pub indian_total_perc: f64,
    pub asian_total_perc: f64,
    pub other_total_perc: f64,
}

impl StateRecord {
    /// Every numeric field paired with its source column name, in file order.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 13] {
        [
            ("Total", self.total),
            ("Hispanic", self.hispanic),
            ("NonHispanic", self.non_hispanic),
            ("WhiteTotal", self.white_total),
            ("BlackTotal", self.black_total),
            ("IndianTotal", self.indian_total),
            ("AsianTotal", self.asian_total),
            ("OtherTotal", self.other_total),
            ("WhiteTotalPerc", self.white_total_perc),
            ("BlackTotalPerc", self.black_total_perc),
            ("IndianTotalPerc", self.indian_total_perc),
            ("AsianTotalPerc", self.asian_total_perc),
            ("OtherTotalPerc", self.other_total_perc),
        ]
    }
}

/// One point of the cross-state scatter plot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    /// X axis: percentage of the state's population that is white.
    pub white_total_perc: f64,
    /// Y axis: total population.
    pub total: f64,
    /// Hover label.
    pub state: String,
}

/// A data problem found by [`Dataset::consistency_issues`](crate::Dataset::consistency_issues).
///
/// Issues are informational. The dataset is still usable when they occur.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConsistencyIssue {
    /// The same state name appears on more than one record.
    DuplicateState { state: String, count: usize },
    /// A numeric field is below zero.
    NegativeValue { state: String, field: String, value: f64 },
    /// `Hispanic + NonHispanic` does not equal `Total`.
    EthnicityMismatch { state: String, total: f64, sum: f64 },
    /// The five race totals do not add up to `Total`.
    RaceTotalMismatch { state: String, total: f64, sum: f64 },
    /// The five race percentages are not close to 100.
    PercentageSum { state: String, sum: f64 },
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateState { state, count } => {
                write!(f, "{}: appears {} times", state, count)
            }
            Self::NegativeValue { state, field, value } => {
                write!(f, "{}: {} is negative ({})", state, field, value)
            }
            Self::EthnicityMismatch { state, total, sum } => write!(
                f,
                "{}: Hispanic + NonHispanic = {} but Total = {}",
                state, sum, total
            ),
            Self::RaceTotalMismatch { state, total, sum } => write!(
                f,
                "{}: race totals sum to {} but Total = {}",
                state, sum, total
            ),
            Self::PercentageSum { state, sum } => {
                write!(f, "{}: race percentages sum to {:.2}", state, sum)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_deserializes_from_source_column_names() {
        let json = r#"{
            "State": "Vermont", "Total": 624340, "Hispanic": 12487, "NonHispanic": 611853,
            "WhiteTotal": 586255, "BlackTotal": 7492, "IndianTotal": 1873, "AsianTotal": 11238,
            "OtherTotal": 17482, "WhiteTotalPerc": 93.9, "BlackTotalPerc": 1.2,
            "IndianTotalPerc": 0.3, "AsianTotalPerc": 1.8, "OtherTotalPerc": 2.8
        }"#;
        let record: StateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.state, "Vermont");
        assert_eq!(record.non_hispanic, 611853.0);
        assert_eq!(record.other_total_perc, 2.8);
    }

    #[test]
    fn record_requires_every_field() {
        let json = r#"{"State": "Vermont", "Total": 624340}"#;
        let result: Result<StateRecord, _> = serde_json::from_str(json);
        assert!(result.is_err(), "Missing numeric fields should be rejected");
    }

    #[test]
    fn issue_display_names_the_state() {
        let issue = ConsistencyIssue::PercentageSum {
            state: "Ohio".to_string(),
            sum: 97.5,
        };
        assert_eq!(issue.to_string(), "Ohio: race percentages sum to 97.50");
    }
}
