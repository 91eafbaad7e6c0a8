//! Error types for the research hub.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No API key configured for the completion endpoint
    #[error("No API key configured for the completion endpoint")]
    MissingApiKey,

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Rate limited by the completion endpoint (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Authentication rejected (401/403 response)
    #[error("Unauthorized ({status}): {message}")]
    Unauthorized {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// HTTP status code carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } => Some(429),
            Self::Unauthorized { status, .. }
            | Self::Server { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure taxonomy of summary generation.
///
/// Both variants are absorbed at the client boundary by
/// [`crate::client::SummaryClient::summarize_or_fallback`].
#[derive(thiserror::Error, Debug)]
pub enum SummaryError {
    /// The request could not be completed (connectivity, timeout, non-2xx).
    #[error("Summary request failed: {0}")]
    NetworkFailure(#[from] ClientError),

    /// The endpoint answered, but not with a payload matching the summary schema.
    #[error("Malformed summary response: {0}")]
    MalformedResponse(String),
}

impl SummaryError {
    /// Create a malformed-response error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Short machine-readable kind, used as a log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NetworkFailure(_) => "network_failure",
            Self::MalformedResponse(_) => "malformed_response",
        }
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

/// Errors from the key-value persistence layer.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file or a stored value is not valid JSON
    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Referenced paper or saved search does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Preference store failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Internal tool logic error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::NotFound(what) => {
                format!("Not found: {what}. Please check the ID is correct.")
            }
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
