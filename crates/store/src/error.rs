//! Store errors
//!
//! Identifier-not-found and column-not-found stay distinguishable so the
//! front end can report which one happened.

use skylark_roster::RosterError;
use thiserror::Error;

/// Errors raised by roster store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    /// Tab missing from the workbook or database
    #[error("Sheet '{0}' not found")]
    SheetNotFound(String),

    /// No row carries the identifier
    #[error("ID '{id}' not found in the {tab} tab")]
    IdNotFound {
        /// Tab searched
        tab: String,
        /// Identifier looked up
        id: String,
    },

    /// Header row lacks the column
    #[error("Could not find '{column}' column in the {tab} tab")]
    ColumnNotFound {
        /// Tab searched
        tab: String,
        /// Column name
        column: String,
    },

    /// Rows could not be parsed into a roster snapshot
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Workbook file is not valid JSON
    #[error("Workbook parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// SQLite error
    #[cfg(feature = "sqlite")]
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Configured backend was not compiled in
    #[error("Store backend '{0}' is not available in this build")]
    BackendUnavailable(String),
}

/// Result alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
