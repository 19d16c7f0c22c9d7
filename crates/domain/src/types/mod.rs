//! Enumerations shared by entities, use cases and presentation code.

mod role;
mod section;
mod status;

pub use role::Role;
pub use section::Section;
pub use status::{PlayerStatus, SessionStatus};
