//! Error types for the Roster client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Failure of a request against the user directory backend
///
/// Every client operation fails with this one error type. The variants only
/// carry detail about where the request broke; none of them is retried or
/// translated by the client.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The transport could not complete the request (DNS, connection
    /// refused, timeout, malformed URL)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status code
    #[error("API error (status {status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// The backend answered 2xx but the body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl NetworkError {
    /// Create a status error from status code and body
    pub fn status_error(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// HTTP status code, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}
