//! Unified error types for the ClickUp agent tools
//!
//! Every failure a tool can produce folds into [`ClickUpError`]:
//! - `Config`: a required credential or list id is missing at construction
//!   time. Fatal, never retried.
//! - `Validation`: a required per-call field is missing. Raised before any
//!   network traffic.
//! - `Remote`: the API answered with a non-success status, or the transport
//!   itself failed. The message stays short (status plus a truncated body
//!   excerpt, or the transport error text).
//! - `Json`: a payload could not be (de)serialized.

use thiserror::Error;

/// Result type alias for ClickUp tool operations
pub type ClickUpResult<T> = Result<T, ClickUpError>;

/// Main error type for the ClickUp agent tools
#[derive(Error, Debug, Clone)]
pub enum ClickUpError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Per-call input validation errors
    #[error("Invalid input: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Remote API or transport errors
    #[error("ClickUp API error: {message}")]
    Remote {
        message: String,
        status_code: Option<u16>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },
}

impl ClickUpError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error for a specific input field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a remote error from an HTTP status and a body excerpt
    pub fn remote(status_code: u16, body_excerpt: impl AsRef<str>) -> Self {
        Self::Remote {
            message: format!("{} - {}", status_code, body_excerpt.as_ref()),
            status_code: Some(status_code),
        }
    }

    /// Create a remote error from a transport-level failure
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
            status_code: None,
        }
    }

    /// Get the HTTP status code, when the error carries one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Remote { status_code, .. } => *status_code,
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClickUpError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}
