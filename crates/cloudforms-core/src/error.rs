//! Error types for Cloudforms API operations.
//!
//! All failure modes the transport can surface are collected here; the
//! resource managers introduce no error taxonomy of their own and pass
//! these through unchanged.

use thiserror::Error;

/// Main error type for Cloudforms API operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The API is temporarily unavailable (connect failure, 5xx, throttling)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Failed to parse an API response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Operation timed out
    #[error("Timeout waiting for the API: {0}")]
    Timeout(String),

    /// Credentials were rejected by the API
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API rejected the request as malformed
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request conflicts with the current resource state
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Invalid endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Specialized result type for Cloudforms operations.
pub type Result<T> = std::result::Result<T, Error>;

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
