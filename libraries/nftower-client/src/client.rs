//! Main Tower client.

use crate::auth::AuthClient;
use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, Session};
use chrono::{Duration as ChronoDuration, Utc};
use nftower_core::{JwtAuthData, UserData, UserProfile};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Client that signs in to a Tower server and assembles the user record.
///
/// The client keeps the current token payload and the last `UserData` it
/// built in a shared session, so clones of the handle see the same login.
///
/// # Example
///
/// ```ignore
/// use nftower_client::{ClientConfig, TowerClient};
///
/// let client = TowerClient::new(ClientConfig::new("https://tower.example.com/api"))?;
/// let user = client.login("user", "password").await?;
/// println!("Signed in as {} ({})", user.display_name(), user.email);
/// ```
#[derive(Clone)]
pub struct TowerClient {
    http: Client,
    url: Arc<str>,
    session: Arc<RwLock<Option<Session>>>,
}

impl TowerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(format!("nftower/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            url: url.into(),
            session: Arc::new(RwLock::new(config.auth.map(Session::new))),
        })
    }

    /// Get the server URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Check if the client holds a session.
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Current token payload, if signed in.
    pub async fn auth(&self) -> Option<JwtAuthData> {
        self.session.read().await.as_ref().map(|s| s.auth.clone())
    }

    /// Last user record assembled by `login` or `current_user`.
    pub async fn cached_user(&self) -> Option<UserData> {
        self.session
            .read()
            .await
            .as_ref()
            .and_then(|s| s.user.clone())
    }

    /// Install session material obtained elsewhere (e.g. stored credentials).
    pub async fn set_auth(&self, auth: JwtAuthData) {
        *self.session.write().await = Some(Session::new(auth));
    }

    /// Login with username and password and load the user record.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserData> {
        let auth = self.auth_client().login(username, password).await?;
        let profile = self.auth_client().get_profile(&auth).await?;

        // The session is only installed once the record is complete
        let user = UserData::from_parts(profile, auth.clone());
        let mut session = Session::new(auth);
        session.user = Some(user.clone());
        *self.session.write().await = Some(session);

        debug!(user_id = %user.id, roles = ?user.roles, "User record assembled");
        Ok(user)
    }

    /// Fetch the signed-in account's profile.
    pub async fn fetch_profile(&self) -> Result<UserProfile> {
        let auth = self.auth().await.ok_or(ClientError::AuthRequired)?;
        self.auth_client().get_profile(&auth).await
    }

    /// Fetch the profile and combine it with the session into a `UserData`.
    pub async fn current_user(&self) -> Result<UserData> {
        let auth = self.auth().await.ok_or(ClientError::AuthRequired)?;
        let profile = self.auth_client().get_profile(&auth).await?;

        let mut guard = self.session.write().await;
        let session = guard.as_mut().ok_or(ClientError::AuthRequired)?;
        // Pair the profile with the session as it is now; a refresh may have
        // landed while the request was in flight.
        let user = UserData::from_parts(profile, session.auth.clone());
        session.user = Some(user.clone());

        debug!(user_id = %user.id, roles = ?user.roles, "User record assembled");
        Ok(user)
    }

    /// Refresh the access token using the stored refresh token.
    ///
    /// Returns the new token payload on success.
    pub async fn refresh(&self) -> Result<JwtAuthData> {
        let refresh_token = {
            let guard = self.session.read().await;
            let session = guard.as_ref().ok_or(ClientError::AuthRequired)?;
            if !session.auth.can_refresh() {
                return Err(ClientError::AuthRequired);
            }
            session.auth.refresh_token.clone().unwrap_or_default()
        };

        let mut auth = self.auth_client().refresh_token(&refresh_token).await?;
        if auth.refresh_token.is_none() {
            auth.refresh_token = Some(refresh_token);
        }

        let mut guard = self.session.write().await;
        // A logout during the request wins; the new tokens are dropped
        let session = guard.as_mut().ok_or(ClientError::AuthRequired)?;
        session.replace_auth(auth.clone());

        info!(username = %auth.username, "Access token refreshed");
        Ok(auth)
    }

    /// Refresh ahead of time when the access token expires within `leeway`.
    ///
    /// Returns whether a refresh took place.
    pub async fn ensure_fresh(&self, leeway: ChronoDuration) -> Result<bool> {
        let stale = {
            let guard = self.session.read().await;
            let session = guard.as_ref().ok_or(ClientError::AuthRequired)?;
            session.auth.can_refresh()
                && session
                    .auth
                    .needs_refresh_at(session.issued_at, Utc::now(), leeway)
        };

        if stale {
            self.refresh().await?;
        }
        Ok(stale)
    }

    /// Clear the session (logout).
    pub async fn logout(&self) {
        *self.session.write().await = None;
        info!("Logged out");
    }

    /// Execute an operation with automatic token refresh on 401.
    ///
    /// If the operation fails with `AuthRequired`, attempts to refresh
    /// the token and retry once.
    pub async fn with_auto_refresh<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        match operation().await {
            Ok(result) => Ok(result),
            Err(ClientError::AuthRequired) => {
                warn!("Token rejected, attempting refresh");
                self.refresh().await?;
                operation().await
            }
            Err(e) => Err(e),
        }
    }

    fn auth_client(&self) -> AuthClient<'_> {
        AuthClient::new(&self.http, &self.url)
    }
}
