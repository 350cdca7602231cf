//! Consistency checks over a loaded dataset.
//!
//! The source data is trusted at load time: only structurally broken input
//! is rejected. This module reports the arithmetic invariants the data is
//! expected to satisfy so callers can log or surface them.

use crate::error::Result;
use crate::models::{ConsistencyIssue, StateRecord};
use crate::Dataset;

/// Default allowed distance of the race percentage sum from 100.
pub const DEFAULT_PERCENT_TOLERANCE: f64 = 1.0;

/// Counts are whole people; anything closer than this is equal.
const COUNT_TOLERANCE: f64 = 0.5;

impl Dataset {
    /// Report every record that breaks a data invariant.
    ///
    /// Duplicates come first (ordered by first appearance), followed by
    /// per-record issues in source order. `percent_tolerance` bounds how far
    /// the five race percentages may sum from 100.
    pub fn consistency_issues(&self, percent_tolerance: f64) -> Result<Vec<ConsistencyIssue>> {
        let mut issues: Vec<ConsistencyIssue> = self
            .query_duplicate_states()?
            .into_iter()
            .map(|(state, count)| ConsistencyIssue::DuplicateState { state, count })
            .collect();

        for record in self.query_records()? {
            issues.extend(record_issues(&record, percent_tolerance));
        }

        if !issues.is_empty() {
            log::debug!("[USDEM] consistency: found {} issues", issues.len());
        }
        Ok(issues)
    }
}

fn record_issues(record: &StateRecord, percent_tolerance: f64) -> Vec<ConsistencyIssue> {
    let mut issues = Vec::new();
    let state = || record.state.clone();

    for (field, value) in record.numeric_fields() {
        if value < 0.0 {
            issues.push(ConsistencyIssue::NegativeValue {
                state: state(),
                field: field.to_string(),
                value,
            });
        }
    }

    let ethnicity_sum = record.hispanic + record.non_hispanic;
    if (ethnicity_sum - record.total).abs() > COUNT_TOLERANCE {
        issues.push(ConsistencyIssue::EthnicityMismatch {
            state: state(),
            total: record.total,
            sum: ethnicity_sum,
        });
    }

    let race_sum = record.white_total
        + record.black_total
        + record.indian_total
        + record.asian_total
        + record.other_total;
    if (race_sum - record.total).abs() > COUNT_TOLERANCE {
        issues.push(ConsistencyIssue::RaceTotalMismatch {
            state: state(),
            total: record.total,
            sum: race_sum,
        });
    }

    let percent_sum = record.white_total_perc
        + record.black_total_perc
        + record.indian_total_perc
        + record.asian_total_perc
        + record.other_total_perc;
    if (percent_sum - 100.0).abs() > percent_tolerance {
        issues.push(ConsistencyIssue::PercentageSum {
            state: state(),
            sum: percent_sum,
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::SAMPLE_JSON;

    #[test]
    fn consistent_records_report_nothing() {
        let json = r#"[{
            "State": "Alaska", "Total": 736990, "Hispanic": 52326, "NonHispanic": 684664,
            "WhiteTotal": 473148, "BlackTotal": 24321, "IndianTotal": 109075,
            "AsianTotal": 46430, "OtherTotal": 84016,
            "WhiteTotalPerc": 64.2, "BlackTotalPerc": 3.3, "IndianTotalPerc": 14.8,
            "AsianTotalPerc": 6.3, "OtherTotalPerc": 11.4
        }]"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert!(dataset
            .consistency_issues(DEFAULT_PERCENT_TOLERANCE)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn percentage_sum_outside_tolerance_is_reported() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        let issues = dataset
            .consistency_issues(DEFAULT_PERCENT_TOLERANCE)
            .unwrap();
        assert_eq!(issues.len(), 1);
        match &issues[0] {
            ConsistencyIssue::PercentageSum { state, sum } => {
                assert_eq!(state, "Ohio");
                assert!((sum - 97.5).abs() < 1e-9);
            }
            other => panic!("unexpected issue: {:?}", other),
        }
    }

    #[test]
    fn wider_tolerance_accepts_percentage_drift() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        assert!(dataset.consistency_issues(5.0).unwrap().is_empty());
    }

    #[test]
    fn duplicates_are_reported_first() {
        let json = SAMPLE_JSON
            .replacen("\"State\": \"Ohio\"", "\"State\": \"Texas\"", 1)
            .replacen("\"OtherTotalPerc\": 1.4", "\"OtherTotalPerc\": 3.9", 1);
        let dataset = Dataset::from_json(&json).unwrap();
        let issues = dataset
            .consistency_issues(DEFAULT_PERCENT_TOLERANCE)
            .unwrap();
        assert_eq!(
            issues,
            vec![ConsistencyIssue::DuplicateState {
                state: "Texas".to_string(),
                count: 2
            }]
        );
    }

    #[test]
    fn count_mismatches_and_negatives_are_reported() {
        let record = StateRecord {
            state: "Nowhere".to_string(),
            total: 100.0,
            hispanic: 30.0,
            non_hispanic: 60.0,
            white_total: 50.0,
            black_total: 20.0,
            indian_total: -5.0,
            asian_total: 10.0,
            other_total: 10.0,
            white_total_perc: 50.0,
            black_total_perc: 20.0,
            indian_total_perc: 0.0,
            asian_total_perc: 10.0,
            other_total_perc: 20.0,
        };
        let issues = record_issues(&record, DEFAULT_PERCENT_TOLERANCE);
        assert_eq!(issues.len(), 3);
        assert!(matches!(
            &issues[0],
            ConsistencyIssue::NegativeValue { field, .. } if field == "IndianTotal"
        ));
        assert!(matches!(
            issues[1],
            ConsistencyIssue::EthnicityMismatch { sum, .. } if sum == 90.0
        ));
        assert!(matches!(
            issues[2],
            ConsistencyIssue::RaceTotalMismatch { sum, .. } if sum == 85.0
        ));
    }

    #[test]
    fn shipped_fixture_is_consistent() {
        let dataset = Dataset::from_json(include_str!("../../fixtures/data.json")).unwrap();
        assert_eq!(dataset.record_count().unwrap(), 51);
        assert!(dataset
            .consistency_issues(DEFAULT_PERCENT_TOLERANCE)
            .unwrap()
            .is_empty());
    }
}
