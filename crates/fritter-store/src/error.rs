//! Error types for store access.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by a store while answering a lookup.
///
/// The filter evaluator never catches or wraps these; they reach the caller
/// exactly as the store produced them.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A post identifier could not be normalized to a [`PostId`](crate::PostId).
    #[error("invalid post id '{value}'")]
    InvalidPostId {
        /// The raw identifier text.
        value: String,
    },

    /// The backing store could not answer the request.
    #[error("store unavailable: {message}")]
    Unavailable {
        /// Details from the backend.
        message: String,
    },

    /// The backing store did not answer in time.
    #[error("store request timed out")]
    Timeout,

    /// I/O error while reading a snapshot file.
    #[error("failed to read snapshot '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable {
            message: message.into(),
        }
    }

    /// Returns true if retrying the same lookup could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Unavailable { .. } | StoreError::Timeout)
    }
}
