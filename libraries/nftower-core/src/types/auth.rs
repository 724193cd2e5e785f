/// Authentication payload embedded in the user record
use super::Role;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Bearer token payload returned by the backend login and refresh endpoints.
///
/// Field names follow the backend's wire format (snake_case), unlike the
/// surrounding `UserData` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtAuthData {
    /// Login name the token was issued to
    pub username: String,

    /// Roles granted by the token
    pub roles: Vec<Role>,

    /// JWT access token for API authentication
    pub access_token: String,

    /// Token type (normally "Bearer")
    pub token_type: String,

    /// Access token lifetime in seconds, counted from issue time
    pub expires_in: u64,

    /// Refresh token for obtaining new access tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl JwtAuthData {
    /// Create a bearer payload with no refresh token
    pub fn bearer(
        username: impl Into<String>,
        access_token: impl Into<String>,
        expires_in: u64,
    ) -> Self {
        Self {
            username: username.into(),
            roles: Vec::new(),
            access_token: access_token.into(),
            token_type: "Bearer".to_string(),
            expires_in,
            refresh_token: None,
        }
    }

    /// Value for the `Authorization` header
    pub fn bearer_header(&self) -> String {
        let token_type = if self.token_type.is_empty() {
            "Bearer"
        } else {
            self.token_type.as_str()
        };
        format!("{} {}", token_type, self.access_token)
    }

    /// Whether a usable refresh token is present
    pub fn can_refresh(&self) -> bool {
        self.refresh_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }

    /// Absolute expiry of the access token, given when it was issued
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> DateTime<Utc> {
        i64::try_from(self.expires_in)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Whether the access token has expired at `now`
    pub fn is_expired_at(&self, issued_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now >= self.expires_at(issued_at)
    }

    /// Whether the access token expires within `leeway` of `now`
    pub fn needs_refresh_at(
        &self,
        issued_at: DateTime<Utc>,
        now: DateTime<Utc>,
        leeway: Duration,
    ) -> bool {
        let deadline = now.checked_add_signed(leeway).unwrap_or(DateTime::<Utc>::MAX_UTC);
        deadline >= self.expires_at(issued_at)
    }
}
