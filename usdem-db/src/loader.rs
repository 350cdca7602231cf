//! Data loading functions for building a [`Dataset`].
//!
//! Each loader parses its source completely before touching the database,
//! so a malformed source never produces a partially loaded dataset.
//!
//! # Source Formats
//!
//! - **JSON**: an array of flat objects, one per state
//! - **CSV** (has headers): the same field names as header columns
//!
//! Required fields: `State, Total, Hispanic, NonHispanic, WhiteTotal,
//! BlackTotal, IndianTotal, AsianTotal, OtherTotal, WhiteTotalPerc,
//! BlackTotalPerc, IndianTotalPerc, AsianTotalPerc, OtherTotalPerc`.
//! Extra fields are ignored.

use crate::error::{DatasetError, Result};
use crate::models::StateRecord;
use crate::Dataset;
use rusqlite::params;

impl Dataset {
    /// Load a dataset from a JSON array of records.
    ///
    /// # Example JSON
    /// ```text
    /// [{"State": "Utah", "Total": 3151239, "Hispanic": 447476, ...}]
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<StateRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Load a dataset from CSV with a header row.
    ///
    /// # Example CSV
    /// ```text
    /// State,Total,Hispanic,NonHispanic,WhiteTotal,...,OtherTotalPerc
    /// Utah,3151239,447476,2703763,2751032,...,8.2
    /// ```
    pub fn from_csv(csv_data: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let records = rdr
            .deserialize::<StateRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    /// Build a dataset from already-parsed records, keeping their order.
    ///
    /// Fails with [`DatasetError::EmptyDataset`] when `records` is empty:
    /// without a first record there is no default selection.
    pub fn from_records(records: Vec<StateRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }

        let dataset = Self::open()?;
        dataset.insert_records(&records)?;
        log::info!("[USDEM] loader: Loaded {} state records", records.len());
        Ok(dataset)
    }

    fn insert_records(&self, records: &[StateRecord]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO states (
                    position, state, total, hispanic, non_hispanic,
                    white_total, black_total, indian_total, asian_total, other_total,
                    white_total_perc, black_total_perc, indian_total_perc,
                    asian_total_perc, other_total_perc
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            )?;
            for (position, r) in records.iter().enumerate() {
                stmt.execute(params![
                    position as i64,
                    r.state,
                    r.total,
                    r.hispanic,
                    r.non_hispanic,
                    r.white_total,
                    r.black_total,
                    r.indian_total,
                    r.asian_total,
                    r.other_total,
                    r.white_total_perc,
                    r.black_total_perc,
                    r.indian_total_perc,
                    r.asian_total_perc,
                    r.other_total_perc,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_data::SAMPLE_JSON;
    use crate::{Dataset, DatasetError};

    const CSV_HEADER: &str = "State,Total,Hispanic,NonHispanic,WhiteTotal,BlackTotal,IndianTotal,AsianTotal,OtherTotal,WhiteTotalPerc,BlackTotalPerc,IndianTotalPerc,AsianTotalPerc,OtherTotalPerc";

    #[test]
    fn load_states_from_json() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();

        let count: i64 = dataset
            .conn
            .query_row("SELECT COUNT(*) FROM states", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);

        let total: f64 = dataset
            .conn
            .query_row(
                "SELECT total FROM states WHERE state = 'Alaska'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(total, 736990.0);
    }

    #[test]
    fn load_preserves_source_order() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        let first: String = dataset
            .conn
            .query_row(
                "SELECT state FROM states WHERE position = 0",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(first, "Texas", "Source order should not be re-sorted");
    }

    #[test]
    fn load_rejects_malformed_json() {
        let result = Dataset::from_json("[{\"State\": \"Texas\",");
        assert!(matches!(result, Err(DatasetError::Json(_))));
    }

    #[test]
    fn load_rejects_missing_field() {
        let json = r#"[{"State": "Texas", "Total": 29000000, "Hispanic": 11000000}]"#;
        let result = Dataset::from_json(json);
        assert!(
            matches!(result, Err(DatasetError::Json(_))),
            "Records without every numeric field should fail to load"
        );
    }

    #[test]
    fn load_rejects_non_numeric_field() {
        let json = SAMPLE_JSON.replacen("\"Total\": 29000000", "\"Total\": \"lots\"", 1);
        assert!(matches!(
            Dataset::from_json(&json),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn load_rejects_empty_array() {
        assert!(matches!(
            Dataset::from_json("[]"),
            Err(DatasetError::EmptyDataset)
        ));
    }

    #[test]
    fn load_ignores_extra_fields() {
        let json = SAMPLE_JSON.replacen("\"State\": \"Texas\",", "\"State\": \"Texas\", \"Region\": \"South\",", 1);
        let dataset = Dataset::from_json(&json).unwrap();
        assert_eq!(dataset.record_count().unwrap(), 3);
    }

    #[test]
    fn load_states_from_csv() {
        let csv = format!(
            "{}\n\
             Utah, 3151239, 447476, 2703763, 2751032, 34664, 31512, 75630, 258401, 87.3, 1.1, 1.0, 2.4, 8.2\n\
             Vermont,624340,12487,611853,586255,7492,1873,11238,17482,93.9,1.2,0.3,1.8,2.8\n",
            CSV_HEADER
        );
        let dataset = Dataset::from_csv(&csv).unwrap();
        assert_eq!(dataset.state_names().unwrap(), vec!["Utah", "Vermont"]);

        let utah = dataset.query_state("Utah").unwrap();
        assert_eq!(utah.hispanic, 447476.0);
        assert_eq!(utah.other_total_perc, 8.2);
    }

    #[test]
    fn load_csv_rejects_short_rows() {
        let csv = format!("{}\nUtah,3151239,447476\n", CSV_HEADER);
        assert!(matches!(Dataset::from_csv(&csv), Err(DatasetError::Csv(_))));
    }

    #[test]
    fn load_csv_rejects_header_only() {
        assert!(matches!(
            Dataset::from_csv(CSV_HEADER),
            Err(DatasetError::EmptyDataset)
        ));
    }
}
