//! User entity - a signed-in identity without credentials
//!
//! This is the record that is persisted across restarts, so its serde shape
//! is a stable contract: `{id, email, name, role, createdAt}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Role;
use crate::value_objects::{DisplayName, Email};
use crate::UserId;

/// A known identity. Never carries a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    email: Email,
    name: DisplayName,
    role: Role,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: UserId,
        email: Email,
        name: DisplayName,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            role,
            created_at,
        }
    }

    #[inline]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[inline]
    pub fn email(&self) -> &Email {
        &self.email
    }

    #[inline]
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample() -> User {
        User::new(
            UserId::from_uuid(Uuid::nil()),
            Email::new("admin@sports.com").unwrap(),
            DisplayName::new("Admin User").unwrap(),
            Role::Admin,
            crate::common::parse_datetime("2024-01-15T10:00:00Z").unwrap(),
        )
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["createdAt", "email", "id", "name", "role"]);
        assert_eq!(obj["role"], "admin");
    }

    #[test]
    fn rejects_record_with_invalid_email() {
        let json = r#"{"id":"00000000-0000-0000-0000-000000000000","email":"nope","name":"A","role":"admin","createdAt":"2024-01-15T10:00:00Z"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }

    #[test]
    fn rejects_record_missing_fields() {
        assert!(serde_json::from_str::<User>(r#"{"id":"x"}"#).is_err());
    }
}
