//! Structural conformance of JSON values against the user record shapes.
//!
//! `serde_json` stops at the first problem it meets. The checks here walk the
//! whole value and collect every missing or mistyped field, so a producer can
//! be told everything that is wrong with a payload at once. Extra keys are
//! never reported.

use crate::error::{CoreError, Result};
use crate::types::{JwtAuthData, Role, UserData, UserProfile};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;

/// What is wrong at a given path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The root value is not a JSON object
    NotAnObject {
        /// JSON kind actually found
        found: &'static str,
    },
    /// A mandatory field is absent
    Missing,
    /// A field is present with the wrong JSON kind
    WrongType {
        /// Kind the field must have
        expected: &'static str,
        /// JSON kind actually found
        found: &'static str,
    },
    /// A role label outside the recognized set
    UnknownRole {
        /// The offending label as sent
        label: String,
    },
}

/// A single conformance failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Location of the failure, rooted at `$` (e.g. `$.jwtAuthData.roles[1]`)
    pub path: String,
    /// What went wrong there
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::NotAnObject { found } => {
                write!(f, "{}: expected object, found {}", self.path, found)
            }
            ViolationKind::Missing => write!(f, "{}: missing field", self.path),
            ViolationKind::WrongType { expected, found } => {
                write!(f, "{}: expected {}, found {}", self.path, expected, found)
            }
            ViolationKind::UnknownRole { label } => {
                write!(f, "{}: unknown role {:?}", self.path, label)
            }
        }
    }
}

/// All violations found in one value, in field declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConformanceReport {
    violations: Vec<Violation>,
}

impl ConformanceReport {
    /// True when no violation was found
    pub fn is_conforming(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Same as `is_conforming`
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in report order
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Violations as a slice
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations reported at exactly `path`
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.path == path)
    }

    /// `Ok(())` when conforming, otherwise the report as an error
    pub fn into_result(self) -> Result<()> {
        if self.is_conforming() {
            Ok(())
        } else {
            Err(CoreError::Conformance(self))
        }
    }

    fn push(&mut self, path: String, kind: ViolationKind) {
        self.violations.push(Violation { path, kind });
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ConformanceReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

#[derive(Clone, Copy)]
enum FieldKind {
    Integer,
    NonNegativeInteger,
    Text,
    OptionalText,
    Roles,
    AuthData,
}

const PROFILE_FIELDS: &[(&str, FieldKind)] = &[
    ("id", FieldKind::Integer),
    ("userName", FieldKind::Text),
    ("email", FieldKind::Text),
    ("roles", FieldKind::Roles),
    ("firstName", FieldKind::Text),
    ("lastName", FieldKind::Text),
    ("organization", FieldKind::Text),
    ("description", FieldKind::Text),
    ("avatar", FieldKind::Text),
];

const USER_DATA_FIELDS: &[(&str, FieldKind)] = &[
    ("id", FieldKind::Integer),
    ("userName", FieldKind::Text),
    ("email", FieldKind::Text),
    ("roles", FieldKind::Roles),
    ("jwtAuthData", FieldKind::AuthData),
    ("firstName", FieldKind::Text),
    ("lastName", FieldKind::Text),
    ("organization", FieldKind::Text),
    ("description", FieldKind::Text),
    ("avatar", FieldKind::Text),
];

const AUTH_DATA_FIELDS: &[(&str, FieldKind)] = &[
    ("username", FieldKind::Text),
    ("roles", FieldKind::Roles),
    ("access_token", FieldKind::Text),
    ("token_type", FieldKind::Text),
    ("expires_in", FieldKind::NonNegativeInteger),
    ("refresh_token", FieldKind::OptionalText),
];

const ROOT: &str = "$";

/// Check a value against the full `UserData` shape
pub fn check_user_data(value: &Value) -> ConformanceReport {
    check_root(value, USER_DATA_FIELDS)
}

/// Check a value against the `UserProfile` shape (no `jwtAuthData`)
pub fn check_user_profile(value: &Value) -> ConformanceReport {
    check_root(value, PROFILE_FIELDS)
}

/// Check a value against the `JwtAuthData` shape
pub fn check_jwt_auth_data(value: &Value) -> ConformanceReport {
    check_root(value, AUTH_DATA_FIELDS)
}

/// Parse JSON text into a `UserData`, reporting every shape violation
pub fn parse_user_data(json: &str) -> Result<UserData> {
    parse_checked(json, check_user_data)
}

/// Parse JSON text into a `UserProfile`, reporting every shape violation
pub fn parse_user_profile(json: &str) -> Result<UserProfile> {
    parse_checked(json, check_user_profile)
}

/// Convert an already-parsed value into `T` after checking it with `check`
pub(crate) fn from_value_checked<T: DeserializeOwned>(
    value: Value,
    check: fn(&Value) -> ConformanceReport,
) -> Result<T> {
    check(&value).into_result()?;
    Ok(serde_json::from_value(value)?)
}

fn parse_checked<T: DeserializeOwned>(
    json: &str,
    check: fn(&Value) -> ConformanceReport,
) -> Result<T> {
    let value: Value = serde_json::from_str(json)?;
    from_value_checked(value, check)
}

impl UserData {
    /// Convert a JSON value, reporting every shape violation
    pub fn from_value(value: Value) -> Result<Self> {
        from_value_checked(value, check_user_data)
    }
}

impl UserProfile {
    /// Convert a JSON value, reporting every shape violation
    pub fn from_value(value: Value) -> Result<Self> {
        from_value_checked(value, check_user_profile)
    }
}

impl JwtAuthData {
    /// Convert a JSON value, reporting every shape violation
    pub fn from_value(value: Value) -> Result<Self> {
        from_value_checked(value, check_jwt_auth_data)
    }
}

fn check_root(value: &Value, fields: &[(&str, FieldKind)]) -> ConformanceReport {
    let mut report = ConformanceReport::default();
    match value.as_object() {
        Some(object) => check_object(object, ROOT, fields, &mut report),
        None => report.push(
            ROOT.to_string(),
            ViolationKind::NotAnObject {
                found: kind_name(value),
            },
        ),
    }
    report
}

fn check_object(
    object: &Map<String, Value>,
    prefix: &str,
    fields: &[(&str, FieldKind)],
    report: &mut ConformanceReport,
) {
    for &(name, kind) in fields {
        let path = format!("{}.{}", prefix, name);
        match object.get(name) {
            None if matches!(kind, FieldKind::OptionalText) => {}
            None => report.push(path, ViolationKind::Missing),
            Some(value) => check_field(value, kind, path, report),
        }
    }
}

fn check_field(value: &Value, kind: FieldKind, path: String, report: &mut ConformanceReport) {
    match kind {
        FieldKind::Integer => {
            if value.as_i64().is_none() {
                report.push(path, wrong_type("integer", value));
            }
        }
        FieldKind::NonNegativeInteger => {
            if value.as_u64().is_none() {
                report.push(path, wrong_type("non-negative integer", value));
            }
        }
        FieldKind::Text => {
            if !value.is_string() {
                report.push(path, wrong_type("string", value));
            }
        }
        FieldKind::OptionalText => {
            if !value.is_string() && !value.is_null() {
                report.push(path, wrong_type("string", value));
            }
        }
        FieldKind::Roles => check_roles(value, &path, report),
        FieldKind::AuthData => match value.as_object() {
            Some(object) => check_object(object, &path, AUTH_DATA_FIELDS, report),
            None => report.push(path, wrong_type("object", value)),
        },
    }
}

fn check_roles(value: &Value, path: &str, report: &mut ConformanceReport) {
    let Some(items) = value.as_array() else {
        report.push(path.to_string(), wrong_type("array of strings", value));
        return;
    };

    for (index, item) in items.iter().enumerate() {
        let item_path = format!("{}[{}]", path, index);
        match item.as_str() {
            Some(label) if Role::from_label(label).is_some() => {}
            Some(label) => report.push(
                item_path,
                ViolationKind::UnknownRole {
                    label: label.to_string(),
                },
            ),
            None => report.push(item_path, wrong_type("string", item)),
        }
    }
}

fn wrong_type(expected: &'static str, found: &Value) -> ViolationKind {
    ViolationKind::WrongType {
        expected,
        found: kind_name(found),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
