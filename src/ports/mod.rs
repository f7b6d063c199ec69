//! Port traits - contracts between the core and its collaborators.
//!
//! The booking core consumes these interfaces; adapters provide them.

mod auth;
mod session_store;
mod user_store;

pub use auth::{PasswordHasher, TokenService};
pub use session_store::SessionStore;
pub use user_store::UserStore;
