//! Signed-in user for this app instance.
//!
//! Holds zero or one [`User`]. The identity service is the only writer;
//! roster facades read it to stamp `created_by` and roster entries.

use sportsched_domain::User;
use tokio::sync::RwLock;

/// Store for the current identity.
pub struct CurrentUserStore {
    inner: RwLock<Option<User>>,
}

impl CurrentUserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Snapshot of the signed-in user, if any.
    pub async fn get(&self) -> Option<User> {
        self.inner.read().await.clone()
    }

    /// Replace the signed-in user.
    pub async fn set(&self, user: User) {
        *self.inner.write().await = Some(user);
    }

    /// Sign out; returns the user that was signed in.
    pub async fn clear(&self) -> Option<User> {
        self.inner.write().await.take()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.inner.read().await.is_some()
    }
}

impl Default for CurrentUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sportsched_domain::{DisplayName, Email, Role, UserId};

    fn user(email: &str) -> User {
        User::new(
            UserId::new(),
            Email::new(email).unwrap(),
            DisplayName::new("Someone").unwrap(),
            Role::Player,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn starts_signed_out() {
        let store = CurrentUserStore::new();
        assert!(!store.is_signed_in().await);
        assert_eq!(store.get().await, None);
    }

    #[tokio::test]
    async fn set_replaces_previous_user() {
        let store = CurrentUserStore::new();
        store.set(user("a@x.com")).await;
        let second = user("b@x.com");
        store.set(second.clone()).await;
        assert_eq!(store.get().await, Some(second));
    }

    #[tokio::test]
    async fn clear_returns_previous_user() {
        let store = CurrentUserStore::new();
        let signed_in = user("a@x.com");
        store.set(signed_in.clone()).await;

        assert_eq!(store.clear().await, Some(signed_in));
        assert_eq!(store.clear().await, None);
    }
}
