//! Platform abstraction ports for key-value persistence and timers.
//!
//! These keep the identity service independent of where the signed-in
//! record lives (memory, a JSON file, browser storage) and of the runtime
//! used to wait.

use std::time::Duration;

use async_trait::async_trait;

/// Persistent storage abstraction (localStorage/file-based)
///
/// Reads and writes are synchronous and never fail from the caller's point
/// of view; implementations log their own I/O problems.
#[cfg_attr(test, mockall::automock)]
pub trait StoragePort: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Async sleep abstraction, used for simulated backend latency.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SleepPort: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Storage key constants
pub mod storage_keys {
    /// Serialized signed-in [`sportsched_domain::User`]
    pub const CURRENT_USER: &str = "sportsapp_user";
}
