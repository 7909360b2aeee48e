//! Error types for the HTTP clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to an external service
#[derive(Debug, Error)]
pub enum ClientError {
    /// The transport itself failed (DNS, connection reset, timeout)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The endpoint answered, but not with the expected status code
    #[error("endpoint {url} is unavailable, response code {status}")]
    BadStatus {
        /// The endpoint that was queried
        url: String,
        /// The observed HTTP status code
        status: u16,
    },

    /// The response body could not be parsed
    #[error("failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::BadStatus { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::BadStatus { status, .. } if *status >= 500)
    }
}
