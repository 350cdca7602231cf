//! Error types for dataset loading and lookup.

use thiserror::Error;

/// Main error type for dataset operations
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The JSON source could not be parsed into records
    #[error("Failed to parse JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// The CSV source could not be parsed into records
    #[error("Failed to parse CSV dataset: {0}")]
    Csv(#[from] csv::Error),

    /// The in-memory database rejected a statement
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The source parsed but held no records
    #[error("Dataset contains no records")]
    EmptyDataset,

    /// No record carries the requested state name
    #[error("State not found: {0}")]
    StateNotFound(String),
}

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;
