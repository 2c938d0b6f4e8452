//! Error types for the console.

use thiserror::Error;

/// Result type alias for collaborator calls.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Rejection of an API collaborator call.
///
/// Stored in collection state as the error marker, hence `Clone + PartialEq`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    // ═══════════════════════════════════════════════════════════
    // Transport Errors
    // ═══════════════════════════════════════════════════════════

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The request timed out in the transport.
    #[error("Request timed out")]
    Timeout,

    // ═══════════════════════════════════════════════════════════
    // Server Errors
    // ═══════════════════════════════════════════════════════════

    /// The caller is not (or no longer) authenticated.
    #[error("Not authenticated")]
    Unauthenticated,

    /// The caller lacks the rights for this call.
    #[error("Permission denied")]
    PermissionDenied,

    /// Any other non-success response.
    #[error("Server responded with {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Message returned by the server
        message: String,
    },
}

impl ApiError {
    /// Map an HTTP status and message onto the error taxonomy.
    #[must_use]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 => Self::Unauthenticated,
            403 => Self::PermissionDenied,
            408 | 504 => Self::Timeout,
            _ => Self::Status {
                status,
                message: message.into(),
            },
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the expected shape.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Unknown deployment mode.
    #[error("Invalid deployment mode: {0} (expected `console` or `public`)")]
    InvalidMode(String),

    /// Configuration validation failed.
    #[error("Configuration validation failed: {0}")]
    Validation(String),
}
