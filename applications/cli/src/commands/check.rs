//! Conformance check of user records stored as JSON files.

use crate::error::Result;
use nftower_core::{check_user_data, check_user_profile, ConformanceReport};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Which record shape a file is expected to hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    /// Full record including `jwtAuthData`
    #[default]
    UserData,
    /// Profile as served by the backend, without session material
    Profile,
}

impl Shape {
    fn check(self, value: &Value) -> ConformanceReport {
        match self {
            Shape::UserData => check_user_data(value),
            Shape::Profile => check_user_profile(value),
        }
    }
}

/// Result of checking a single file
#[derive(Debug)]
pub enum FileOutcome {
    Conforming,
    NonConforming(ConformanceReport),
    InvalidJson(String),
    Unreadable(String),
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, FileOutcome::Conforming)
    }
}

#[derive(Debug)]
pub struct FileCheck {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Outcome of a whole `check` run
#[derive(Debug, Default)]
pub struct CheckSummary {
    pub files: Vec<FileCheck>,
}

impl CheckSummary {
    pub fn all_ok(&self) -> bool {
        self.files.iter().all(|f| f.outcome.is_ok())
    }

    pub fn failed(&self) -> usize {
        self.files.iter().filter(|f| !f.outcome.is_ok()).count()
    }
}

/// Check one file against `shape`
pub fn check_file(path: &Path, shape: Shape) -> FileCheck {
    let outcome = match std::fs::read_to_string(path) {
        Err(e) => FileOutcome::Unreadable(e.to_string()),
        Ok(text) => match serde_json::from_str::<Value>(&text) {
            Err(e) => FileOutcome::InvalidJson(e.to_string()),
            Ok(value) => {
                let report = shape.check(&value);
                if report.is_conforming() {
                    FileOutcome::Conforming
                } else {
                    FileOutcome::NonConforming(report)
                }
            }
        },
    };

    debug!(path = %path.display(), ok = outcome.is_ok(), "Checked file");
    FileCheck {
        path: path.to_path_buf(),
        outcome,
    }
}

/// Check every file and write a report to `out`
pub fn run<W: Write>(paths: &[PathBuf], shape: Shape, out: &mut W) -> Result<CheckSummary> {
    let mut summary = CheckSummary::default();

    for path in paths {
        let check = check_file(path, shape);
        write_outcome(&check, out)?;
        summary.files.push(check);
    }

    if !summary.all_ok() {
        warn!(
            failed = summary.failed(),
            total = summary.files.len(),
            "Some files do not conform"
        );
    }

    Ok(summary)
}

fn write_outcome<W: Write>(check: &FileCheck, out: &mut W) -> Result<()> {
    let path = check.path.display();
    match &check.outcome {
        FileOutcome::Conforming => writeln!(out, "OK   {}", path)?,
        FileOutcome::NonConforming(report) => {
            writeln!(out, "FAIL {} ({} violations)", path, report.len())?;
            for violation in report {
                writeln!(out, "     {}", violation)?;
            }
        }
        FileOutcome::InvalidJson(e) => writeln!(out, "FAIL {}: invalid JSON: {}", path, e)?,
        FileOutcome::Unreadable(e) => writeln!(out, "FAIL {}: {}", path, e)?,
    }
    Ok(())
}
