//! Typed query methods for retrieving state records from the dataset.
//!
//! All queries return typed structs from [`crate::models`] that can be
//! serialized to JSON for consumption by D3.js chart components. Every
//! multi-row query is ordered by source position.

use crate::error::{DatasetError, Result};
use crate::models::{ScatterPoint, StateRecord};
use crate::Dataset;
use rusqlite::{params, OptionalExtension, Row};

const RECORD_COLUMNS: &str = "state, total, hispanic, non_hispanic, \
     white_total, black_total, indian_total, asian_total, other_total, \
     white_total_perc, black_total_perc, indian_total_perc, asian_total_perc, other_total_perc";

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<StateRecord> {
    Ok(StateRecord {
        state: row.get(0)?,
        total: row.get(1)?,
        hispanic: row.get(2)?,
        non_hispanic: row.get(3)?,
        white_total: row.get(4)?,
        black_total: row.get(5)?,
        indian_total: row.get(6)?,
        asian_total: row.get(7)?,
        other_total: row.get(8)?,
        white_total_perc: row.get(9)?,
        black_total_perc: row.get(10)?,
        indian_total_perc: row.get(11)?,
        asian_total_perc: row.get(12)?,
        other_total_perc: row.get(13)?,
    })
}

impl Dataset {
    /// Number of records, duplicates included.
    pub fn record_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM states", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// State names in source order, for populating the selector.
    pub fn state_names(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT state FROM states ORDER BY position")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        log::debug!("[USDEM] query: state_names returned {} records", rows.len());
        Ok(rows)
    }

    /// The first record's state name, used as the initial selection.
    pub fn default_state(&self) -> Result<String> {
        self.conn
            .query_row(
                "SELECT state FROM states ORDER BY position LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?
            .ok_or(DatasetError::EmptyDataset)
    }

    /// Look up the record for `state` by exact name.
    ///
    /// If the name is duplicated, the record that came first in the source
    /// wins. Returns [`DatasetError::StateNotFound`] when no record matches.
    pub fn query_state(&self, state: &str) -> Result<StateRecord> {
        let sql = format!(
            "SELECT {} FROM states WHERE state = ?1 ORDER BY position LIMIT 1",
            RECORD_COLUMNS
        );
        self.conn
            .query_row(&sql, params![state], record_from_row)
            .optional()?
            .ok_or_else(|| DatasetError::StateNotFound(state.to_string()))
    }

    /// All records in source order.
    pub fn query_records(&self) -> Result<Vec<StateRecord>> {
        let sql = format!("SELECT {} FROM states ORDER BY position", RECORD_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], record_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::debug!("[USDEM] query: query_records returned {} records", rows.len());
        Ok(rows)
    }

    /// Every state projected onto (white percentage, total, name).
    pub fn query_scatter_points(&self) -> Result<Vec<ScatterPoint>> {
        let mut stmt = self.conn.prepare(
            "SELECT white_total_perc, total, state FROM states
             ORDER BY position",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ScatterPoint {
                    white_total_perc: row.get(0)?,
                    total: row.get(1)?,
                    state: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::debug!(
            "[USDEM] query: query_scatter_points returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// State names that occur more than once, with their counts, ordered by
    /// first appearance.
    pub(crate) fn query_duplicate_states(&self) -> Result<Vec<(String, usize)>> {
        let mut stmt = self.conn.prepare(
            "SELECT state, COUNT(*) FROM states
             GROUP BY state
             HAVING COUNT(*) > 1
             ORDER BY MIN(position)",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as usize))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
