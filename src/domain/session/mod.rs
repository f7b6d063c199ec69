//! Session domain module - the booking core.
//!
//! Owns the lifecycle state machine (`Session` aggregate), the half-open
//! interval overlap checker (`slot`), and the authorization policy gate
//! evaluated before every transition.

mod aggregate;
mod errors;
mod policy;
mod slot;

pub use aggregate::{Attendee, ScheduledSlot, Session};
pub use errors::SessionError;
pub use policy::{can_perform, SessionAction};
pub use slot::{conflicts, TimeSlot};
