//! Sportsched Engine library.
//!
//! Identity, sport catalog and session roster logic on top of
//! `sportsched-domain`.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration (auth, roster, reports)
//! - `stores/` - Runtime state (the signed-in user)
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `seed` - Demo catalog and sessions
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod seed;
pub mod stores;
pub mod use_cases;

pub use app::{App, AppError};
