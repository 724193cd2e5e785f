//! Error types for the Tower client.

use nftower_core::ConformanceReport;
use thiserror::Error;

/// Errors that can occur when talking to a Tower server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Authentication required but no session available
    #[error("Authentication required")]
    AuthRequired,

    /// Authentication failed (invalid credentials)
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Token refresh failed
    #[error("Token refresh failed: {0}")]
    TokenRefreshFailed(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Response parsed as JSON but does not have the expected shape
    #[error("Response does not match the expected shape:\n{0}")]
    NonConforming(ConformanceReport),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl From<nftower_core::CoreError> for ClientError {
    fn from(err: nftower_core::CoreError) -> Self {
        match err {
            nftower_core::CoreError::Conformance(report) => Self::NonConforming(report),
            other => Self::ParseError(other.to_string()),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
