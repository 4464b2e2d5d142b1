//! Error types for tack operations.

use std::io;
use thiserror::Error;

/// The error type for tack operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// HTTP request to the board feed failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The board feed document could not be parsed.
    #[error("Feed error: {0}")]
    Feed(#[from] tack_feed::Error),

    /// Ticket not found.
    #[error("Ticket not found: {0}")]
    TicketNotFound(String),
}

/// A specialized Result type for tack operations.
pub type Result<T> = std::result::Result<T, Error>;
