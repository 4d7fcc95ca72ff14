//! Error types for feed ingestion

use thiserror::Error;

/// Errors that can occur while fetching or parsing a feed
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server returned a non-success status
    #[error("Feed error (status {status}): {message}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Context message
        message: String,
    },

    /// Document parsed as neither RSS nor Atom
    #[error("Parse error: {0}")]
    ParseError(String),
}
