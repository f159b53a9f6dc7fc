//! Error types for call-sheet ingestion and store operations.

use thiserror::Error;

/// Errors raised at the ingestion boundary and by call sheet stores.
///
/// The aggregation functions themselves never fail: they only ever see
/// validated [`CallSheetEntry`](crate::CallSheetEntry) values.
#[derive(Error, Debug)]
pub enum CallSheetError {
    /// The entry's name was empty or whitespace only.
    #[error("Entry '{id}' is missing a name")]
    MissingName { id: String },

    /// An available date was not a strict `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{value}' on entry '{entry}': {reason}")]
    InvalidDate {
        entry: String,
        value: String,
        reason: String,
    },

    /// Two roster records carried the same id.
    #[error("Duplicate entry id: {0}")]
    DuplicateId(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// An update carried no fields to apply.
    #[error("Update for entry '{0}' has no fields set")]
    EmptyUpdate(String),

    /// The roster document was not valid JSON for the entry shape.
    #[error("Roster parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout callsheet-engine.
pub type Result<T> = std::result::Result<T, CallSheetError>;
