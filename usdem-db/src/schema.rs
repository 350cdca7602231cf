//! SQL schema definition for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when a dataset is opened.

/// Returns the full SQL schema as a single batch string.
///
/// Creates one table, `states`, holding one row per source record. The
/// `position` column keeps the source order: the first row is the default
/// selection and the scatter plot lists states in this order. State names
/// are indexed but not unique, since the source is trusted rather than
/// validated at load time.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS states (
        position INTEGER PRIMARY KEY,
        state TEXT NOT NULL,
        total REAL NOT NULL,
        hispanic REAL NOT NULL,
        non_hispanic REAL NOT NULL,
        white_total REAL NOT NULL,
        black_total REAL NOT NULL,
        indian_total REAL NOT NULL,
        asian_total REAL NOT NULL,
        other_total REAL NOT NULL,
        white_total_perc REAL NOT NULL,
        black_total_perc REAL NOT NULL,
        indian_total_perc REAL NOT NULL,
        asian_total_perc REAL NOT NULL,
        other_total_perc REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_states_state ON states(state);
    "#
}
