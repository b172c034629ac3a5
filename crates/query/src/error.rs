use std::path::PathBuf;
use thiserror::Error;

use crate::models::RecordKind;

/// Error types for the taskboard query engine
#[derive(Error, Debug)]
pub enum QueryError {
    /// Caller referenced a field or key the record shape does not define
    #[error("Invalid {kind} query: {reason}")]
    InvalidQuery { kind: RecordKind, reason: String },

    /// Error reading a dataset file
    #[error("Failed to read dataset at {path}: {source}")]
    ReadDataset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error decoding a dataset file
    #[error("Failed to parse dataset at {path}")]
    ParseDataset {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Error encoding query output as JSON
    #[error("Failed to encode output: {source}")]
    EncodeOutput {
        #[source]
        source: serde_json::Error,
    },

    /// Error for records that break a dataset invariant
    #[error("{message}")]
    ValidationError { message: String },
}

impl QueryError {
    /// Build an `InvalidQuery` error for the given record shape.
    pub fn invalid_query(kind: RecordKind, reason: impl Into<String>) -> Self {
        QueryError::InvalidQuery {
            kind,
            reason: reason.into(),
        }
    }

    /// Whether this error is a caller contract violation rather than a data problem.
    pub fn is_invalid_query(&self) -> bool {
        matches!(self, QueryError::InvalidQuery { .. })
    }

    /// Get the full error message including nested parse error details.
    ///
    /// This is useful for displaying detailed error information to users.
    pub fn full_message(&self) -> String {
        match self {
            QueryError::ParseDataset { path, source } => {
                format!("Failed to parse dataset at {}: {}", path.display(), source)
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for query and dataset operations
pub type QueryResult<T> = Result<T, QueryError>;
