//! Index construction error types.

use thiserror::Error;

/// Errors that can occur while building an index.
///
/// Queries against a built index never fail.
#[derive(Debug, Error)]
pub enum SearchError {
    /// IO error reading a dataset file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset is not a valid JSON entry array
    #[error("Dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two entries share an id
    #[error("Duplicate entry id: {0}")]
    DuplicateId(String),

    /// Entry fails a structural check
    #[error("Invalid entry '{id}': {reason}")]
    InvalidEntry { id: String, reason: String },
}
