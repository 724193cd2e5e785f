//! nftower Client
//!
//! HTTP client library that signs in to a Tower server and assembles the
//! `UserData` record the web client works with.
//!
//! # Features
//!
//! - **Authentication**: Login with username/password, token refresh
//! - **Profile**: Fetch the signed-in account and pair it with the session
//! - **Shape checks**: Every payload is checked for conformance before use
//!
//! # Example
//!
//! ```ignore
//! use nftower_client::{ClientConfig, TowerClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TowerClient::new(ClientConfig::new("https://tower.example.com/api"))?;
//!
//!     let user = client.login("user", "password").await?;
//!     println!("Logged in as {} <{}>", user.display_name(), user.email);
//!
//!     client.logout().await;
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod types;

pub use auth::AuthClient;
pub use client::TowerClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, Session};
