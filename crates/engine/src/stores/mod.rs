//! In-memory state storage modules.
//!
//! Stores manage runtime state that doesn't belong in a repository:
//! - `CurrentUserStore` - the signed-in identity

pub mod current_user;

// Re-export store types
pub use current_user::CurrentUserStore;
