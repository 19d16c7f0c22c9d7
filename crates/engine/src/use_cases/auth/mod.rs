//! Identity use cases: login, register, logout and session restore.
//!
//! The signed-in user lives in [`CurrentUserStore`]; the same record is
//! mirrored to durable storage under [`storage_keys::CURRENT_USER`] so a
//! restart can pick it up again.

mod directory;
mod registration;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use sportsched_domain::{DisplayName, DomainError, Email, Role, User, UserId};

use crate::infrastructure::ports::{storage_keys, ClockPort, SleepPort, StoragePort};
use crate::stores::CurrentUserStore;
use crate::use_cases::validation::ValidationError;

pub use directory::{demo_admin_id, demo_player_id, DirectoryEntry, IdentityDirectory};
pub use registration::{RegistrationForm, MIN_PASSWORD_LENGTH};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("User already exists")]
    DuplicateIdentity,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<ValidationError> for AuthError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<DomainError> for AuthError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::Parse(msg) => Self::InvalidInput(msg),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

/// Login, registration and the signed-in record.
pub struct IdentityService {
    directory: Arc<IdentityDirectory>,
    storage: Arc<dyn StoragePort>,
    sleeper: Arc<dyn SleepPort>,
    clock: Arc<dyn ClockPort>,
    current: Arc<CurrentUserStore>,
    latency: Duration,
    /// Emails registered during this process. Never consulted by `login`.
    registered: Mutex<HashSet<String>>,
}

impl IdentityService {
    pub fn new(
        directory: Arc<IdentityDirectory>,
        storage: Arc<dyn StoragePort>,
        sleeper: Arc<dyn SleepPort>,
        clock: Arc<dyn ClockPort>,
        current: Arc<CurrentUserStore>,
        latency: Duration,
    ) -> Self {
        Self {
            directory,
            storage,
            sleeper,
            clock,
            current,
            latency,
            registered: Mutex::new(HashSet::new()),
        }
    }

    /// Sign in with an exact email and password match.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.sleeper.sleep(self.latency).await;

        let Some(user) = self.directory.authenticate(email, password) else {
            tracing::info!(email = %email, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        self.sign_in(&user).await;
        tracing::info!(user_id = %user.id(), role = %user.role(), "User logged in");
        Ok(user)
    }

    /// Create a new identity and sign it in.
    ///
    /// The new identity is not added to the directory, so it cannot be used
    /// with `login` after signing out. Its email is still claimed: a second
    /// registration with it fails with [`AuthError::DuplicateIdentity`].
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<User, AuthError> {
        registration::validate_registration(email, password, name)?;
        let email = Email::new(email)?;
        let name = DisplayName::new(name)?;

        self.sleeper.sleep(self.latency).await;

        {
            let mut registered = self.registered.lock().await;
            if self.directory.contains_email(email.as_str()) || registered.contains(email.as_str()) {
                tracing::info!(email = %email, "Registration rejected: email already known");
                return Err(AuthError::DuplicateIdentity);
            }
            registered.insert(email.as_str().to_string());
        }

        let user = User::new(UserId::new(), email, name, role, self.clock.now());
        self.sign_in(&user).await;
        tracing::info!(user_id = %user.id(), role = %user.role(), "User registered");
        Ok(user)
    }

    /// Sign out and forget the persisted record. Never fails.
    pub async fn logout(&self) {
        if let Some(user) = self.current.clear().await {
            tracing::info!(user_id = %user.id(), "User logged out");
        }
        self.storage.remove(storage_keys::CURRENT_USER);
    }

    /// Pick up the persisted record from a previous run.
    ///
    /// A record that does not parse is purged. A valid record is trusted
    /// without checking the directory again.
    pub async fn restore_session(&self) -> Option<User> {
        let raw = self.storage.load(storage_keys::CURRENT_USER)?;

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                self.current.set(user.clone()).await;
                tracing::debug!(user_id = %user.id(), "Restored signed-in user");
                Some(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed persisted user");
                self.storage.remove(storage_keys::CURRENT_USER);
                None
            }
        }
    }

    pub async fn current_user(&self) -> Option<User> {
        self.current.get().await
    }

    async fn sign_in(&self, user: &User) {
        self.current.set(user.clone()).await;
        match serde_json::to_string(user) {
            Ok(json) => self.storage.save(storage_keys::CURRENT_USER, &json),
            Err(e) => tracing::error!(error = %e, "Failed to serialize signed-in user"),
        }
    }
}
