//! DateTime parsing utilities with consistent error handling.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::DomainError;

/// Parses an RFC3339 timestamp string, returning an error if parsing fails.
///
/// # Examples
///
/// ```
/// use sportsched_domain::common::parse_datetime;
/// use chrono::Datelike;
///
/// let dt = parse_datetime("2024-01-15T10:30:00Z").unwrap();
/// assert_eq!(dt.year(), 2024);
/// ```
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string is not valid RFC3339.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

/// Parses a calendar date in `YYYY-MM-DD` form.
pub fn parse_session_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| DomainError::validation(format!("Invalid date '{}': {}", s, e)))
}

/// Parses a wall-clock time in `HH:MM` form, also accepting `HH:MM:SS`.
pub fn parse_session_time(s: &str) -> Result<NaiveTime, DomainError> {
    let trimmed = s.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|e| DomainError::validation(format!("Invalid time '{}': {}", s, e)))
}
