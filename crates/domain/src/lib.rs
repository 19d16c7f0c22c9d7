extern crate self as sportsched_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod schedule;
pub mod types;
pub mod value_objects;

pub use entities::{
    JoinOutcome, LeaveOutcome, NewSession, Session, SessionPlayer, SessionRecord, Sport,
    SportChanges, User,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{SessionId, SessionPlayerId, SportId, UserId};

pub use schedule::{classify, SessionPartition};

pub use types::{PlayerStatus, Role, Section, SessionStatus};

pub use value_objects::{
    Description, DisplayName, Email, PlayerLimit, SessionDuration, SessionTitle, SportName,
    Venue, MIN_SESSION_MINUTES,
};
