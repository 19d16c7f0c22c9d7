//! Domain entities - Core business objects with identity

mod session;
mod sport;
mod user;

pub use session::{JoinOutcome, LeaveOutcome, NewSession, Session, SessionPlayer, SessionRecord};
pub use sport::{Sport, SportChanges};
pub use user::User;
