//! Foundation value objects shared across domain modules.

mod auth;
mod errors;
mod ids;
mod session_status;
mod state_machine;
mod timestamp;

pub use auth::{Actor, AuthError, Role};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{SessionId, UserId};
pub use session_status::SessionStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
