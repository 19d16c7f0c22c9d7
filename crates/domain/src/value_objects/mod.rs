//! Value objects - Immutable objects defined by their attributes

mod limits;
mod names;

pub use limits::{PlayerLimit, SessionDuration, MIN_SESSION_MINUTES};
pub use names::{Description, DisplayName, Email, SessionTitle, SportName, Venue};
