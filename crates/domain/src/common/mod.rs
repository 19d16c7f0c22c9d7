//! Common utility functions shared across the domain and engine.
//!
//! Pure functions only: no side effects, no I/O.

pub mod datetime;

pub use datetime::{parse_datetime, parse_session_date, parse_session_time};
