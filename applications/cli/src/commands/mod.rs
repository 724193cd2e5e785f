//! Subcommand implementations

pub mod account;
pub mod check;

pub use account::OutputFormat;
pub use check::{CheckSummary, FileOutcome, Shape};
