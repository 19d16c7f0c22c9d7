//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty (except Description)
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for name fields (SportName, SessionTitle, DisplayName, Venue)
const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for description fields
const MAX_DESCRIPTION_LENGTH: usize = 5000;

/// Maximum length for email addresses
const MAX_EMAIL_LENGTH: usize = 254;

/// Generates a trimmed, non-empty, length-limited string newtype.
macro_rules! define_name {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Create a new validated ", $label, ".")]
            ///
            /// # Errors
            ///
            /// Returns `DomainError::Validation` if the value is empty after
            /// trimming or exceeds 200 characters.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::validation(concat!($label, " cannot be empty")));
                }
                if trimmed.len() > MAX_NAME_LENGTH {
                    return Err(DomainError::validation(format!(
                        concat!($label, " cannot exceed {} characters"),
                        MAX_NAME_LENGTH
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Returns the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }
    };
}

define_name!(
    /// A validated sport name (non-empty, <=200 chars, trimmed)
    SportName,
    "Sport name"
);

define_name!(
    /// A validated session title (non-empty, <=200 chars, trimmed)
    SessionTitle,
    "Session title"
);

define_name!(
    /// A validated user display name (non-empty, <=200 chars, trimmed)
    DisplayName,
    "Name"
);

define_name!(
    /// A validated venue for a session (non-empty, <=200 chars, trimmed)
    Venue,
    "Location"
);

// ============================================================================
// Email
// ============================================================================

/// A validated email address (trimmed, must contain `@` with text either side)
///
/// Case is preserved: identity lookups compare emails exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new validated email address.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the address is empty, too long, or
    /// has no `@` separating a local part from a domain.
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let email = email.into();
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Email cannot be empty"));
        }
        if trimmed.len() > MAX_EMAIL_LENGTH {
            return Err(DomainError::validation(format!(
                "Email cannot exceed {} characters",
                MAX_EMAIL_LENGTH
            )));
        }
        match trimmed.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(DomainError::validation(format!(
                "Email is not a valid address: {}",
                trimmed
            ))),
        }
    }

    /// Returns the email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> String {
        email.0
    }
}

// ============================================================================
// Description
// ============================================================================

/// A validated description (<=5000 chars, empty is valid)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Create a new validated description.
    ///
    /// Empty strings are valid for descriptions.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the description exceeds 5000 characters.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.len() > MAX_DESCRIPTION_LENGTH {
            return Err(DomainError::validation(format!(
                "Description cannot exceed {} characters",
                MAX_DESCRIPTION_LENGTH
            )));
        }
        Ok(Self(text))
    }

    /// Create an empty description.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Returns the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the description is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Description {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Description {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Description> for String {
    fn from(desc: Description) -> String {
        desc.0
    }
}
