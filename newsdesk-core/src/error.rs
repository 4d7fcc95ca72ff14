//! Error types for the dashboard

use thiserror::Error;

/// Workspace-wide error type
#[derive(Error, Debug)]
pub enum NewsdeskError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl NewsdeskError {
    pub fn network(msg: impl Into<String>) -> Self {
        NewsdeskError::Network(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        NewsdeskError::Parse(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        NewsdeskError::NotFound(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        NewsdeskError::Config(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        NewsdeskError::Io(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        NewsdeskError::Internal(msg.into())
    }
}
