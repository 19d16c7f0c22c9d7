//! Directory of known identities that `login` checks against.
//!
//! The directory is configuration, not user data: it is built once at
//! startup (from the demo table or a JSON file) and never grows. Accounts
//! created with `register` are not added to it.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use sportsched_domain::{DisplayName, DomainError, Email, Role, User, UserId};

use crate::infrastructure::config::ConfigError;

/// One configured account, as written in a directory file.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    /// Stable id; generated when omitted.
    #[serde(default)]
    pub id: Option<UserId>,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

impl fmt::Debug for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryEntry")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("role", &self.role)
            .finish()
    }
}

/// A password that never shows up in logs.
#[derive(Clone, PartialEq, Eq)]
struct Credential(String);

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password: Credential,
}

/// Id of the demo administrator account.
pub fn demo_admin_id() -> UserId {
    UserId::from_uuid(Uuid::from_u128(1))
}

/// Id of the demo player account.
pub fn demo_player_id() -> UserId {
    UserId::from_uuid(Uuid::from_u128(2))
}

/// Lookup table of email -> credential + profile.
#[derive(Debug, Clone, Default)]
pub struct IdentityDirectory {
    accounts: Vec<Account>,
}

impl IdentityDirectory {
    /// Build a directory from configured entries.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for malformed emails or names and
    /// for an email listed twice.
    pub fn from_entries(
        entries: Vec<DirectoryEntry>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let mut accounts: Vec<Account> = Vec::with_capacity(entries.len());
        for entry in entries {
            let email = Email::new(entry.email)?;
            if accounts.iter().any(|a| a.user.email() == &email) {
                return Err(DomainError::validation(format!(
                    "Directory lists {} more than once",
                    email
                )));
            }
            let user = User::new(
                entry.id.unwrap_or_default(),
                email,
                DisplayName::new(entry.name)?,
                entry.role,
                created_at,
            );
            accounts.push(Account {
                user,
                password: Credential(entry.password),
            });
        }
        Ok(Self { accounts })
    }

    /// The two demo accounts: `admin@sports.com` and `player@sports.com`.
    pub fn demo(created_at: DateTime<Utc>) -> Self {
        let entries = vec![
            DirectoryEntry {
                id: Some(demo_admin_id()),
                email: "admin@sports.com".to_string(),
                password: "admin123".to_string(),
                name: "Admin User".to_string(),
                role: Role::Admin,
            },
            DirectoryEntry {
                id: Some(demo_player_id()),
                email: "player@sports.com".to_string(),
                password: "player123".to_string(),
                name: "John Player".to_string(),
                role: Role::Player,
            },
        ];
        Self::from_entries(entries, created_at).expect("demo directory entries are valid")
    }

    /// Load a JSON array of [`DirectoryEntry`] from `path`.
    pub fn load_json(path: &Path, created_at: DateTime<Utc>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let entries: Vec<DirectoryEntry> =
            serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::from_entries(entries, created_at).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Profile for an exact email and password match.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<User> {
        self.accounts
            .iter()
            .find(|a| a.user.email().as_str() == email && a.password.0 == password)
            .map(|a| a.user.clone())
    }

    /// Whether any account uses exactly this email.
    pub fn contains_email(&self, email: &str) -> bool {
        self.accounts.iter().any(|a| a.user.email().as_str() == email)
    }

    /// Profiles of every configured account, without credentials.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.accounts.iter().map(|a| &a.user)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn demo_directory_authenticates_admin() {
        let directory = IdentityDirectory::demo(Utc::now());
        let user = directory.authenticate("admin@sports.com", "admin123").unwrap();
        assert_eq!(user.role(), Role::Admin);
        assert_eq!(user.id(), demo_admin_id());
        assert_eq!(user.name().as_str(), "Admin User");
    }

    #[test]
    fn wrong_password_or_email_fails() {
        let directory = IdentityDirectory::demo(Utc::now());
        assert!(directory.authenticate("admin@sports.com", "wrong").is_none());
        assert!(directory.authenticate("ADMIN@sports.com", "admin123").is_none());
        assert!(directory.authenticate("nobody@sports.com", "admin123").is_none());
    }

    #[test]
    fn email_lookup_is_exact() {
        let directory = IdentityDirectory::demo(Utc::now());
        assert!(directory.contains_email("player@sports.com"));
        assert!(!directory.contains_email("Player@sports.com"));
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn duplicate_emails_rejected() {
        let entry = DirectoryEntry {
            id: None,
            email: "a@x.com".to_string(),
            password: "pw".to_string(),
            name: "A".to_string(),
            role: Role::Player,
        };
        let result = IdentityDirectory::from_entries(vec![entry.clone(), entry], Utc::now());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn debug_output_hides_passwords() {
        let directory = IdentityDirectory::demo(Utc::now());
        let rendered = format!("{:?}", directory);
        assert!(!rendered.contains("admin123"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    fn loads_json_file_with_generated_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"email":"coach@club.org","password":"whistle","name":"Coach","role":"admin"}}]"#
        )
        .unwrap();

        let directory = IdentityDirectory::load_json(file.path(), Utc::now()).unwrap();

        let user = directory.authenticate("coach@club.org", "whistle").unwrap();
        assert!(user.is_admin());
    }

    #[test]
    fn malformed_json_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = IdentityDirectory::load_json(file.path(), Utc::now()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err =
            IdentityDirectory::load_json(&dir.path().join("missing.json"), Utc::now()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
