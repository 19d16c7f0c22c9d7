//! In-memory repositories with copy-on-write collections.
//!
//! Every write builds a new vector and swaps it in under the lock, so a
//! snapshot handed out earlier never changes underneath its reader.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use sportsched_domain::{Session, SessionId, Sport, SportId};

use crate::infrastructure::ports::{RepoError, SessionRepo, SportRepo};

/// An ordered collection replaced wholesale on every write.
struct CowList<T> {
    items: RwLock<Arc<Vec<T>>>,
}

impl<T: Clone> CowList<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(Arc::new(items)),
        }
    }

    async fn snapshot(&self) -> Arc<Vec<T>> {
        self.items.read().await.clone()
    }

    /// Replace the entry whose key matches `item`'s, keeping its position,
    /// or append `item` when no entry matches.
    async fn upsert<K, F>(&self, item: &T, key: F)
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let mut guard = self.items.write().await;
        let wanted = key(item);
        let mut replaced = false;
        let mut next: Vec<T> = guard
            .iter()
            .map(|existing| {
                if key(existing) == wanted {
                    replaced = true;
                    item.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        if !replaced {
            next.push(item.clone());
        }
        *guard = Arc::new(next);
    }

    async fn remove_where<F>(&self, matches: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let mut guard = self.items.write().await;
        let next: Vec<T> = guard.iter().filter(|item| !matches(item)).cloned().collect();
        let removed = next.len() != guard.len();
        if removed {
            *guard = Arc::new(next);
        }
        removed
    }
}

// =============================================================================
// Sports
// =============================================================================

/// Sport catalog held in memory.
pub struct InMemorySportRepo {
    sports: CowList<Sport>,
}

impl InMemorySportRepo {
    pub fn new() -> Self {
        Self::with_sports(Vec::new())
    }

    pub fn with_sports(sports: Vec<Sport>) -> Self {
        Self {
            sports: CowList::new(sports),
        }
    }
}

impl Default for InMemorySportRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SportRepo for InMemorySportRepo {
    async fn list(&self) -> Result<Vec<Sport>, RepoError> {
        Ok(self.sports.snapshot().await.to_vec())
    }

    async fn get(&self, id: SportId) -> Result<Option<Sport>, RepoError> {
        Ok(self
            .sports
            .snapshot()
            .await
            .iter()
            .find(|sport| sport.id() == id)
            .cloned())
    }

    async fn save(&self, sport: &Sport) -> Result<(), RepoError> {
        self.sports.upsert(sport, Sport::id).await;
        Ok(())
    }

    async fn delete(&self, id: SportId) -> Result<bool, RepoError> {
        Ok(self.sports.remove_where(|sport| sport.id() == id).await)
    }
}

// =============================================================================
// Sessions
// =============================================================================

/// Session list held in memory.
pub struct InMemorySessionRepo {
    sessions: CowList<Session>,
}

impl InMemorySessionRepo {
    pub fn new() -> Self {
        Self::with_sessions(Vec::new())
    }

    pub fn with_sessions(sessions: Vec<Session>) -> Self {
        Self {
            sessions: CowList::new(sessions),
        }
    }
}

impl Default for InMemorySessionRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepo for InMemorySessionRepo {
    async fn list(&self) -> Result<Vec<Session>, RepoError> {
        Ok(self.sessions.snapshot().await.to_vec())
    }

    async fn get(&self, id: SessionId) -> Result<Option<Session>, RepoError> {
        Ok(self
            .sessions
            .snapshot()
            .await
            .iter()
            .find(|session| session.id() == id)
            .cloned())
    }

    async fn save(&self, session: &Session) -> Result<(), RepoError> {
        self.sessions.upsert(session, Session::id).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sportsched_domain::{Description, PlayerLimit, SportChanges, SportName, UserId};

    fn sport(name: &str) -> Sport {
        Sport::new(
            SportName::new(name).unwrap(),
            Description::empty(),
            PlayerLimit::new(10).unwrap(),
            UserId::new(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn save_appends_new_and_replaces_existing_in_place() {
        let repo = InMemorySportRepo::new();
        let first = sport("Basketball");
        let second = sport("Soccer");
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        let renamed = first.with_changes(SportChanges {
            name: Some(SportName::new("Hoops").unwrap()),
            ..Default::default()
        });
        repo.save(&renamed).await.unwrap();

        let sports = repo.list().await.unwrap();
        assert_eq!(sports.len(), 2);
        assert_eq!(sports[0].name().as_str(), "Hoops");
        assert_eq!(sports[1].id(), second.id());
    }

    #[tokio::test]
    async fn earlier_snapshot_is_not_affected_by_writes() {
        let repo = InMemorySportRepo::with_sports(vec![sport("Tennis")]);
        let before = repo.sports.snapshot().await;

        repo.save(&sport("Volleyball")).await.unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let tennis = sport("Tennis");
        let repo = InMemorySportRepo::with_sports(vec![tennis.clone()]);

        assert!(repo.delete(tennis.id()).await.unwrap());
        assert!(!repo.delete(tennis.id()).await.unwrap());
        assert!(repo.get(tennis.id()).await.unwrap().is_none());
    }
}
