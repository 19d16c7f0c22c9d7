//! Common validation helpers for form input.
//!
//! Field labels match what the forms show, so messages can be displayed
//! unchanged.

/// Validation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} is required")]
    Empty { field_name: &'static str },

    #[error("{field_name} must be at least {min} characters")]
    TooShort { field_name: &'static str, min: usize },

    #[error("{field_name} must be at least {min}")]
    BelowMinimum { field_name: &'static str, min: u32 },

    #[error("{field_name} is invalid: {reason}")]
    Invalid {
        field_name: &'static str,
        reason: String,
    },
}

/// Validate a string is non-empty after trimming.
pub fn require_non_empty(value: &str, field_name: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field_name });
    }
    Ok(())
}

/// Validate a string has at least `min` characters (not trimmed).
pub fn require_min_length(
    value: &str,
    min: usize,
    field_name: &'static str,
) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort { field_name, min });
    }
    Ok(())
}

/// Validate a number is at least `min`.
pub fn require_at_least(value: u32, min: u32, field_name: &'static str) -> Result<(), ValidationError> {
    if value < min {
        return Err(ValidationError::BelowMinimum { field_name, min });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_empty() {
        assert_eq!(
            require_non_empty("   ", "Title"),
            Err(ValidationError::Empty { field_name: "Title" })
        );
        assert!(require_non_empty(" x ", "Title").is_ok());
    }

    #[test]
    fn min_length_counts_characters() {
        assert!(require_min_length("secret", 6, "Password").is_ok());
        let err = require_min_length("abc", 6, "Password").unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }

    #[test]
    fn at_least_is_inclusive() {
        assert!(require_at_least(15, 15, "Duration").is_ok());
        assert!(require_at_least(14, 15, "Duration").is_err());
    }
}
