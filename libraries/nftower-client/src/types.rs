//! Types for Tower API requests and client configuration.

use chrono::{DateTime, Utc};
use nftower_core::{JwtAuthData, UserData};
use serde::Serialize;

/// Configuration for connecting to a Tower server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "https://tower.example.com/api")
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Existing session material (if already authenticated)
    pub auth: Option<JwtAuthData>,
}

impl ClientConfig {
    /// Create a new config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            auth: None,
        }
    }

    /// Create a config with existing session material.
    pub fn with_auth(url: impl Into<String>, auth: JwtAuthData) -> Self {
        Self {
            auth: Some(auth),
            ..Self::new(url)
        }
    }

    /// Override request and connect timeouts.
    pub fn timeouts(mut self, timeout_secs: u64, connect_timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self.connect_timeout_secs = connect_timeout_secs;
        self
    }
}

/// Session held by the client between requests.
#[derive(Debug, Clone)]
pub struct Session {
    /// Current token payload
    pub auth: JwtAuthData,
    /// When `auth` was received, used for expiry checks
    pub issued_at: DateTime<Utc>,
    /// Last user record assembled with this session
    pub user: Option<UserData>,
}

impl Session {
    pub(crate) fn new(auth: JwtAuthData) -> Self {
        Self {
            auth,
            issued_at: Utc::now(),
            user: None,
        }
    }

    /// Swap in refreshed token material, keeping the cached user in step.
    pub(crate) fn replace_auth(&mut self, auth: JwtAuthData) {
        if let Some(user) = self.user.as_mut() {
            user.replace_auth(auth.clone());
        }
        self.auth = auth;
        self.issued_at = Utc::now();
    }
}

// =============================================================================
// Request Types
// =============================================================================

/// Request body for the login endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Form body for the token refresh endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct RefreshTokenRequest<'a> {
    pub grant_type: &'static str,
    pub refresh_token: &'a str,
}

impl<'a> RefreshTokenRequest<'a> {
    pub fn new(refresh_token: &'a str) -> Self {
        Self {
            grant_type: "refresh_token",
            refresh_token,
        }
    }
}
