//! In-memory SQLite dataset of US state demographic records.
//!
//! This crate loads the dashboard's static data file into an in-memory
//! SQLite database and exposes typed query methods for the view model and
//! the Dioxus/D3.js frontend compiled to WASM.
//!
//! # Architecture
//!
//! - `Rc<Connection>` wrapper, cheaply cloneable for single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - Source data embedded via `include_str!` at compile time in consuming crates
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! A [`Dataset`] can only be built through one of its loaders, and nothing
//! writes to it afterwards, so it is immutable for its whole lifetime.
//!
//! # Usage
//!
//! ```rust
//! use usdem_db::Dataset;
//!
//! let json = r#"[{
//!     "State": "Vermont", "Total": 624340, "Hispanic": 12487, "NonHispanic": 611853,
//!     "WhiteTotal": 586255, "BlackTotal": 7492, "IndianTotal": 1873, "AsianTotal": 11238,
//!     "OtherTotal": 17482, "WhiteTotalPerc": 93.9, "BlackTotalPerc": 1.2,
//!     "IndianTotalPerc": 0.3, "AsianTotalPerc": 1.8, "OtherTotalPerc": 2.8
//! }]"#;
//! let dataset = Dataset::from_json(json).unwrap();
//!
//! assert_eq!(dataset.state_names().unwrap(), vec!["Vermont".to_string()]);
//! let vermont = dataset.query_state("Vermont").unwrap();
//! assert_eq!(vermont.total, 624340.0);
//! ```

pub mod error;
pub mod models;
pub mod schema;
mod consistency;
mod loader;
mod queries;

pub use consistency::DEFAULT_PERCENT_TOLERANCE;
pub use error::{DatasetError, Result};
pub use models::{ConsistencyIssue, ScatterPoint, StateRecord};

use rusqlite::Connection;
use std::fmt;
use std::rc::Rc;

/// Immutable table of state records backed by an in-memory SQLite database.
///
/// Clones share the same underlying connection.
#[derive(Clone)]
pub struct Dataset {
    conn: Rc<Connection>,
}

impl Dataset {
    /// Open an empty in-memory database with the schema applied.
    fn open() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(conn),
        })
    }
}

impl PartialEq for Dataset {
    /// Two handles are equal when they share the same connection.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("records", &self.record_count().ok())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::test_data::SAMPLE_JSON;
    use super::*;

    #[test]
    fn dataset_opens_empty_schema() {
        let dataset = Dataset::open();
        assert!(dataset.is_ok(), "Dataset should open without errors");
    }

    #[test]
    fn dataset_clones_share_connection() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        let clone = dataset.clone();
        assert!(dataset == clone, "Clone should share the same Rc");
        assert_eq!(clone.record_count().unwrap(), 3);
    }

    #[test]
    fn separately_loaded_datasets_are_distinct() {
        let a = Dataset::from_json(SAMPLE_JSON).unwrap();
        let b = Dataset::from_json(SAMPLE_JSON).unwrap();
        assert!(a != b);
    }

    #[test]
    fn debug_shows_record_count() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        assert_eq!(format!("{:?}", dataset), "Dataset { records: Some(3) }");
    }
}
