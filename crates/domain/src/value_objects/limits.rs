//! Numeric value objects for roster capacity and session length

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Shortest session the scheduler accepts, in minutes
pub const MIN_SESSION_MINUTES: u32 = 15;

// ============================================================================
// PlayerLimit
// ============================================================================

/// Maximum number of joined players (always >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PlayerLimit(u32);

impl PlayerLimit {
    /// Create a validated player limit.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when `max` is zero.
    pub fn new(max: u32) -> Result<Self, DomainError> {
        if max == 0 {
            return Err(DomainError::validation("Max players must be at least 1"));
        }
        Ok(Self(max))
    }

    /// Returns the limit as a plain number.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Lowers this limit to `ceiling` when it exceeds it.
    pub fn clamped_to(self, ceiling: PlayerLimit) -> PlayerLimit {
        self.min(ceiling)
    }
}

impl fmt::Display for PlayerLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PlayerLimit {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerLimit> for u32 {
    fn from(limit: PlayerLimit) -> u32 {
        limit.0
    }
}

// ============================================================================
// SessionDuration
// ============================================================================

/// Length of a session in minutes (>= 15)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SessionDuration(u32);

impl SessionDuration {
    /// Create a validated duration.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when `minutes` is below 15.
    pub fn from_minutes(minutes: u32) -> Result<Self, DomainError> {
        if minutes < MIN_SESSION_MINUTES {
            return Err(DomainError::validation(format!(
                "Duration must be at least {} minutes",
                MIN_SESSION_MINUTES
            )));
        }
        Ok(Self(minutes))
    }

    #[inline]
    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn to_chrono(self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.0))
    }
}

impl TryFrom<u32> for SessionDuration {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_minutes(value)
    }
}

impl From<SessionDuration> for u32 {
    fn from(duration: SessionDuration) -> u32 {
        duration.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_rejected() {
        let err = PlayerLimit::new(0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn clamp_lowers_to_ceiling() {
        let requested = PlayerLimit::new(100).unwrap();
        let ceiling = PlayerLimit::new(10).unwrap();
        assert_eq!(requested.clamped_to(ceiling).get(), 10);
    }

    #[test]
    fn clamp_keeps_smaller_request() {
        let requested = PlayerLimit::new(6).unwrap();
        let ceiling = PlayerLimit::new(10).unwrap();
        assert_eq!(requested.clamped_to(ceiling).get(), 6);
    }

    #[test]
    fn limit_rejects_zero_on_deserialize() {
        assert!(serde_json::from_str::<PlayerLimit>("0").is_err());
        assert_eq!(serde_json::from_str::<PlayerLimit>("4").unwrap().get(), 4);
    }

    #[test]
    fn duration_minimum_is_fifteen_minutes() {
        assert!(SessionDuration::from_minutes(14).is_err());
        assert_eq!(SessionDuration::from_minutes(15).unwrap().minutes(), 15);
    }

    #[test]
    fn duration_converts_to_chrono() {
        let duration = SessionDuration::from_minutes(90).unwrap();
        assert_eq!(duration.to_chrono(), chrono::Duration::minutes(90));
    }
}
