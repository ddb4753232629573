//! Error types for content store reads.

use thiserror::Error;

/// Coarse classification of a failed section load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The query succeeded but matched no document.
    Empty,
    /// Transport, status, or decode failure.
    Failed,
}

/// Errors that can occur while reading from the content store.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Query returned `null`.
    #[error("No {doc_type} data found")]
    Empty { doc_type: &'static str },

    /// Failed to reach the content store.
    #[error("Content store request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Content store answered with a non-success status.
    #[error("Content store returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response or document did not match the expected shape.
    #[error("Failed to decode {doc_type} document: {source}")]
    Decode {
        doc_type: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The configured host could not be turned into a query URL.
    #[error("Invalid content store URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ContentError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            ContentError::Empty { .. } => FetchErrorKind::Empty,
            _ => FetchErrorKind::Failed,
        }
    }
}
