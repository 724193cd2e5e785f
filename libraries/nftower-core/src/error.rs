//! Core error types for nftower

use crate::conformance::ConformanceReport;
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for nftower
#[derive(Error, Debug)]
pub enum CoreError {
    /// A JSON value does not match the expected record shape
    #[error("Value does not conform to the expected shape:\n{0}")]
    Conformance(ConformanceReport),

    /// Role label outside the recognized set
    #[error("Unknown role label: {0}")]
    InvalidRole(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create an invalid role error
    pub fn invalid_role(label: impl Into<String>) -> Self {
        Self::InvalidRole(label.into())
    }

    /// The conformance report, if this error carries one
    pub fn report(&self) -> Option<&ConformanceReport> {
        match self {
            Self::Conformance(report) => Some(report),
            _ => None,
        }
    }
}
