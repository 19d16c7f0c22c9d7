//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Catalog and session storage (could swap memory -> a database)
//! - Key-value persistence of the signed-in user
//! - Timers and the clock (for testing)

mod error;
mod platform;
mod repos;
mod testing;

pub use error::RepoError;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{SessionRepo, SportRepo};

// =============================================================================
// Platform Ports
// =============================================================================
pub use platform::{storage_keys, SleepPort, StoragePort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use platform::{MockSleepPort, MockStoragePort};
#[cfg(test)]
pub use repos::{MockSessionRepo, MockSportRepo};
#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;
