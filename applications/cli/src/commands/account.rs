//! Commands that talk to a Tower server on behalf of an account.

use crate::config::CliConfig;
use crate::error::{CliError, Result};
use nftower_client::TowerClient;
use nftower_core::{JwtAuthData, Role, UserData, UserProfile};
use std::io::Write;
use tracing::info;

/// How account details are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Summary,
    Json,
}

/// Sign in and print the assembled user record
pub async fn login<W: Write>(
    config: &CliConfig,
    username: &str,
    password: Option<&str>,
    format: OutputFormat,
    out: &mut W,
) -> Result<UserData> {
    let password = password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| {
            CliError::MissingArgument("password (use --password or NFTOWER_PASSWORD)".into())
        })?;

    let client = TowerClient::new(config.client_config())?;
    let user = client.login(username, password).await?;
    info!(user_id = %user.id, "Signed in");

    match format {
        OutputFormat::Summary => write_summary(out, &user.to_summary())?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&user)?)?,
    }
    Ok(user)
}

/// Fetch and print the profile an access token belongs to
pub async fn whoami<W: Write>(
    config: &CliConfig,
    access_token: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<UserProfile> {
    let client = TowerClient::new(config.client_config())?;
    client
        .set_auth(JwtAuthData::bearer(String::new(), access_token, 0))
        .await;

    let profile = client.fetch_profile().await?;

    match format {
        OutputFormat::Summary => write_summary(out, &profile.to_summary())?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&profile)?)?,
    }
    Ok(profile)
}

struct Summary<'a> {
    id: String,
    name: String,
    user_name: &'a str,
    email: &'a str,
    organization: &'a str,
    roles: &'a [Role],
}

trait ToSummary {
    fn to_summary(&self) -> Summary<'_>;
}

impl ToSummary for UserData {
    fn to_summary(&self) -> Summary<'_> {
        Summary {
            id: self.id.to_string(),
            name: self.display_name(),
            user_name: &self.user_name,
            email: &self.email,
            organization: &self.organization,
            roles: &self.roles,
        }
    }
}

impl ToSummary for UserProfile {
    fn to_summary(&self) -> Summary<'_> {
        Summary {
            id: self.id.to_string(),
            name: self.display_name(),
            user_name: &self.user_name,
            email: &self.email,
            organization: &self.organization,
            roles: &self.roles,
        }
    }
}

fn write_summary<W: Write>(out: &mut W, summary: &Summary<'_>) -> Result<()> {
    let roles: Vec<&str> = summary.roles.iter().map(|r| r.as_str()).collect();

    writeln!(out, "id:           {}", summary.id)?;
    writeln!(out, "name:         {}", summary.name)?;
    writeln!(out, "user name:    {}", summary.user_name)?;
    writeln!(out, "email:        {}", summary.email)?;
    if !summary.organization.is_empty() {
        writeln!(out, "organization: {}", summary.organization)?;
    }
    writeln!(out, "roles:        {}", roles.join(", "))?;
    Ok(())
}
