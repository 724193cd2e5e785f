/// User domain types
use super::{JwtAuthData, Role, UserId};
use serde::{Deserialize, Serialize};

/// Client-side view of an authenticated user account.
///
/// Every field is mandatory on the wire. Text fields may be empty strings but
/// are never absent or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// Unique account identifier, immutable after creation
    pub id: UserId,

    /// Login/display handle
    pub user_name: String,

    /// Contact/login address
    pub email: String,

    /// Authorization roles assigned to the account, in server order
    pub roles: Vec<Role>,

    /// Session material the record was obtained with
    pub jwt_auth_data: JwtAuthData,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Affiliation label
    pub organization: String,

    /// Free-text profile bio
    pub description: String,

    /// Reference (e.g. URL) to a profile image
    pub avatar: String,
}

/// The user record as served by the profile endpoint, before session
/// material is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique account identifier
    pub id: UserId,
    /// Login/display handle
    pub user_name: String,
    /// Contact/login address
    pub email: String,
    /// Authorization roles, in server order
    pub roles: Vec<Role>,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Affiliation label
    pub organization: String,
    /// Free-text profile bio
    pub description: String,
    /// Reference to a profile image
    pub avatar: String,
}

impl UserData {
    /// Assemble the record from a fetched profile and the session it was
    /// fetched with
    pub fn from_parts(profile: UserProfile, jwt_auth_data: JwtAuthData) -> Self {
        Self {
            id: profile.id,
            user_name: profile.user_name,
            email: profile.email,
            roles: profile.roles,
            jwt_auth_data,
            first_name: profile.first_name,
            last_name: profile.last_name,
            organization: profile.organization,
            description: profile.description,
            avatar: profile.avatar,
        }
    }

    /// Split the record back into profile and session material
    pub fn into_parts(self) -> (UserProfile, JwtAuthData) {
        let profile = UserProfile {
            id: self.id,
            user_name: self.user_name,
            email: self.email,
            roles: self.roles,
            first_name: self.first_name,
            last_name: self.last_name,
            organization: self.organization,
            description: self.description,
            avatar: self.avatar,
        };
        (profile, self.jwt_auth_data)
    }

    /// Full name, or the login handle when no name is set
    pub fn display_name(&self) -> String {
        display_name(&self.first_name, &self.last_name, &self.user_name)
    }

    /// Whether the account holds `role`
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Whether the account holds `Role::Admin`
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Value for the `Authorization` header of follow-up requests
    pub fn bearer_header(&self) -> String {
        self.jwt_auth_data.bearer_header()
    }

    /// Replace the session material, e.g. after a token refresh
    pub fn replace_auth(&mut self, jwt_auth_data: JwtAuthData) -> JwtAuthData {
        std::mem::replace(&mut self.jwt_auth_data, jwt_auth_data)
    }
}

impl UserProfile {
    /// Full name, or the login handle when no name is set
    pub fn display_name(&self) -> String {
        display_name(&self.first_name, &self.last_name, &self.user_name)
    }

    /// Whether the account holds `role`
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

fn display_name(first: &str, last: &str, user_name: &str) -> String {
    let full = format!("{} {}", first.trim(), last.trim());
    let full = full.trim();
    if full.is_empty() {
        user_name.to_string()
    } else {
        full.to_string()
    }
}
