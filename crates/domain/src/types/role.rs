//! Account roles
//!
//! Admins curate the sport catalog; players browse and join sessions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// Role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Manages sports and sees reports
    Admin,
    /// Browses, creates and joins sessions
    #[default]
    Player,
}

impl Role {
    /// Check if this role is Admin
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Check if this role may create, edit or delete sports
    pub fn can_manage_sports(&self) -> bool {
        self.is_admin()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Player => "player",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "player" => Ok(Self::Player),
            other => Err(DomainError::parse(format!("Unknown role: {}", other))),
        }
    }
}
