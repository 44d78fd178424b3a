//! Error types for the Roster library.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::Violation;

/// Main error type for Roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required columns are absent. Raised before any row is processed.
    #[error("{table} dataset missing columns: {}", .missing.join(", "))]
    Structural {
        table: &'static str,
        missing: Vec<String>,
    },

    /// A cleaned table breaks a range, uniqueness or non-null invariant.
    #[error("Cleaned dataset {0}")]
    Invariant(Violation),

    /// Empty file or no data to read.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// An upstream stage has not produced its output yet.
    #[error("{} not found. Run: {hint}", .path.display())]
    MissingInput { path: PathBuf, hint: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RosterError {
    /// Wrap an IO error with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RosterError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true for missing-column failures.
    pub fn is_structural(&self) -> bool {
        matches!(self, RosterError::Structural { .. })
    }
}

impl From<Violation> for RosterError {
    fn from(violation: Violation) -> Self {
        RosterError::Invariant(violation)
    }
}

/// Result type alias for Roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
