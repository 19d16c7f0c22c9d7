//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area. Use cases talk to
//! the outside world only through the port traits in
//! [`crate::infrastructure::ports`].

pub mod auth;
pub mod reports;
pub mod roster;
pub mod validation;

// Re-export main types
pub use auth::{AuthError, IdentityDirectory, IdentityService};
pub use reports::{DashboardStats, MySessions, ReportSummary, Reports};
pub use roster::{RosterError, SessionRoster, SportCrud};
