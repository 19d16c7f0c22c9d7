//! Sport catalog and session roster use cases.
//!
//! Operations take the acting user explicitly; the [`crate::App`] facade
//! fills it in from the signed-in user.

mod sessions;
mod sports;

use sportsched_domain::DomainError;

use crate::infrastructure::ports::RepoError;
use crate::use_cases::validation::ValidationError;

pub use sessions::{CreateSessionRequest, SessionDetails, SessionRoster, UNKNOWN_SPORT};
pub use sports::{CreateSportRequest, SportCrud, UpdateSportRequest};

/// Shared error type for roster use cases.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Session is full ({current}/{max} players)")]
    SessionFull { current: u32, max: u32 },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl RosterError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}

impl From<DomainError> for RosterError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::Parse(msg) => Self::InvalidInput(msg),
            DomainError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            DomainError::SessionFull { current, max } => Self::SessionFull { current, max },
        }
    }
}

impl From<ValidationError> for RosterError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
