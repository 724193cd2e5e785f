//! nftower CLI Library
//!
//! Command-line front end for checking user records and signing in to a
//! Tower server.
//!
//! This library exposes the command implementations for testing purposes.

pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types for convenience
pub use config::CliConfig;
pub use error::{CliError, Result};
