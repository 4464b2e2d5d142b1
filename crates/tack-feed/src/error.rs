//! Error types for tack-feed operations.

use thiserror::Error;

/// The error type for tack-feed operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document root was not a JSON object.
    #[error("Invalid document: expected a JSON object at the root, found {0}")]
    NotAnObject(&'static str),
}

/// A specialized Result type for tack-feed operations.
pub type Result<T> = std::result::Result<T, Error>;
