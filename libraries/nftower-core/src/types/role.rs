/// Authorization role labels
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A recognized authorization role.
///
/// Roles travel on the wire as their label (`ROLE_USER`, `ROLE_ADMIN`). Any
/// other label is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Regular account
    #[serde(rename = "ROLE_USER")]
    User,
    /// Administrator account
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    /// Every recognized role, in declaration order
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    /// Wire label of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }

    /// Look up a role by its wire label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == label)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| CoreError::invalid_role(s))
    }
}
