//! Repository port traits for the sport catalog and the session list.
//!
//! `save` is an upsert keyed by id: implementations replace the stored entry
//! with the same id or append a new one.

use async_trait::async_trait;
use sportsched_domain::{Session, SessionId, Sport, SportId};

use super::error::RepoError;

// =============================================================================
// Catalog
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SportRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Sport>, RepoError>;
    async fn get(&self, id: SportId) -> Result<Option<Sport>, RepoError>;
    async fn save(&self, sport: &Sport) -> Result<(), RepoError>;
    /// Returns whether an entry was removed.
    async fn delete(&self, id: SportId) -> Result<bool, RepoError>;
}

// =============================================================================
// Sessions
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Session>, RepoError>;
    async fn get(&self, id: SessionId) -> Result<Option<Session>, RepoError>;
    async fn save(&self, session: &Session) -> Result<(), RepoError>;
}
