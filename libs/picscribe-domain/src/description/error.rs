//! Domain errors for description generation
//!
//! These are domain-level errors that abstract away infrastructure details.
//! Their display strings are the messages shown to API clients.

use thiserror::Error;

/// Message returned when a required request field is missing or empty
pub const MISSING_FIELDS_MESSAGE: &str = "Image data and mimeType are required";

/// Errors that can occur while generating a description
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptionError {
    /// The request is missing required fields or is malformed
    #[error("{0}")]
    Validation(String),

    /// The server is missing configuration needed to reach the provider
    #[error("{0}")]
    Config(String),

    /// The caller did not present the configured shared secret
    #[error("Unauthorized")]
    Unauthorized,

    /// The provider did not answer before the deadline
    #[error("Request timed out")]
    Timeout,

    /// The provider call failed (transport error or non-success status)
    #[error("Failed to generate description")]
    UpstreamFailure(String),

    /// The provider answered but returned no text
    #[error("No description generated")]
    EmptyResult,
}

impl DescriptionError {
    /// Create a validation error with a message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Validation error for a request missing `imageData` or `mimeType`
    pub fn missing_fields() -> Self {
        Self::Validation(MISSING_FIELDS_MESSAGE.to_string())
    }

    /// Create a config error with a message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an upstream failure with the underlying detail
    ///
    /// The detail is kept for logs; clients only see the generic message.
    pub fn upstream_failure(detail: impl Into<String>) -> Self {
        Self::UpstreamFailure(detail.into())
    }
}

/// Result type alias for description operations
pub type Result<T> = std::result::Result<T, DescriptionError>;
