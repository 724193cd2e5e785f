//! Authentication and profile endpoints of the Tower API.

use crate::error::{ClientError, Result};
use crate::types::{LoginRequest, RefreshTokenRequest};
use nftower_core::{JwtAuthData, UserProfile};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Authentication client for a Tower server.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Login with username and password.
    ///
    /// Returns the token payload on success.
    pub async fn login(&self, username: &str, password: &str) -> Result<JwtAuthData> {
        let url = format!("{}/login", self.base_url);
        debug!(url = %url, username = %username, "Attempting login");

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();

        if status.is_success() {
            let value = json_body(response, "login response").await?;
            let auth = JwtAuthData::from_value(value)?;

            info!(
                username = %auth.username,
                roles = ?auth.roles,
                expires_in = auth.expires_in,
                "Login successful"
            );

            Ok(auth)
        } else if status.as_u16() == 401 {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Login failed: invalid credentials");
            Err(ClientError::AuthFailed(
                "Invalid username or password".to_string(),
            ))
        } else {
            Err(server_error(response).await)
        }
    }

    /// Exchange a refresh token for a new token payload.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<JwtAuthData> {
        let url = format!("{}/oauth/access_token", self.base_url);
        debug!(url = %url, "Refreshing access token");

        let response = self
            .http
            .post(&url)
            .form(&RefreshTokenRequest::new(refresh_token))
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();

        if status.is_success() {
            let value = json_body(response, "refresh response").await?;
            let auth = JwtAuthData::from_value(value)?;

            debug!(expires_in = auth.expires_in, "Token refresh successful");
            Ok(auth)
        } else if matches!(status.as_u16(), 400 | 401 | 403) {
            warn!(status = %status, "Token refresh failed: refresh token expired or invalid");
            Err(ClientError::TokenRefreshFailed(
                "Refresh token expired or invalid".to_string(),
            ))
        } else {
            Err(server_error(response).await)
        }
    }

    /// Fetch the profile of the account `auth` was issued to.
    pub async fn get_profile(&self, auth: &JwtAuthData) -> Result<UserProfile> {
        let url = format!("{}/user", self.base_url);
        debug!(url = %url, "Fetching user profile");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, auth.bearer_header())
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();

        if status.is_success() {
            let value = json_body(response, "user profile").await?;
            let profile = UserProfile::from_value(value)?;

            debug!(user_id = %profile.id, user_name = %profile.user_name, "Fetched user profile");
            Ok(profile)
        } else if status.as_u16() == 401 {
            Err(ClientError::AuthRequired)
        } else {
            Err(server_error(response).await)
        }
    }
}

fn send_error(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::ServerUnreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

async fn json_body(response: Response, what: &str) -> Result<Value> {
    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse {}: {}", what, e)))
}

async fn server_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    ClientError::ServerError { status, message }
}
