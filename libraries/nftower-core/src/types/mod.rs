//! Domain types for the Tower user record

mod auth;
mod ids;
mod role;
mod user;

pub use auth::JwtAuthData;
pub use ids::UserId;
pub use role::Role;
pub use user::{UserData, UserProfile};
