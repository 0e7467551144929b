//! Error types and handling.

use thiserror::Error;

use crate::form::FieldErrors;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed (network, timeout, or non-2xx status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded into the expected type
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Unusable configuration value (e.g. a malformed backend URL)
    #[error("Config error: {0}")]
    Config(String),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid argument passed to an operation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Employee draft failed field validation
    #[error("Invalid form: {0}")]
    InvalidForm(FieldErrors),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a config error with message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error with message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True for failures of the transport itself (unreachable, timeout, bad status).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}
