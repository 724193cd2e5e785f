//! Common test utilities and fixtures
#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// A profile body as the server returns it
pub fn profile_json() -> Value {
    json!({
        "id": 3,
        "userName": "jdoe",
        "email": "jdoe@example.com",
        "roles": ["ROLE_USER"],
        "firstName": "Jane",
        "lastName": "Doe",
        "organization": "Acme",
        "description": "",
        "avatar": ""
    })
}

/// A token payload as the login endpoint returns it
pub fn auth_json(access_token: &str) -> Value {
    json!({
        "username": "jdoe",
        "roles": ["ROLE_USER"],
        "access_token": access_token,
        "token_type": "Bearer",
        "expires_in": 3600,
        "refresh_token": "refresh-1"
    })
}

/// A full user record
pub fn user_data_json() -> Value {
    let mut value = profile_json();
    value["jwtAuthData"] = auth_json("access-1");
    value
}

/// Write `contents` to `name` inside `dir`
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}
