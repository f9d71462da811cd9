//! Typed errors for the docdiff library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can
//! match on failure kinds and render user-facing messages.

use thiserror::Error;
use uuid::Uuid;

use crate::extract::DocumentFormat;

/// Errors that can occur during ingestion and comparison.
#[derive(Debug, Error)]
pub enum DocdiffError {
    /// Filename suffix not recognized and the content is not valid UTF-8 text
    #[error("cannot read {filename} as text: {reason}")]
    UnsupportedFormat { filename: String, reason: String },

    /// Format recognized but the content could not be parsed
    #[error("{format} extraction failed: {reason}")]
    ExtractionFailed {
        format: DocumentFormat,
        reason: String,
    },

    /// Comparison referenced an id that does not resolve in the store
    #[error("document not found: {id}")]
    DocumentNotFound { id: Uuid },

    /// Storage operation failed
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DocdiffError {
    /// Wrap a backend error as a storage failure.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Result type alias for docdiff operations.
pub type Result<T> = std::result::Result<T, DocdiffError>;
