//! Session service handlers.
//!
//! Each operation is a handler over the `SessionStore` port: authorize,
//! load, run the state machine decision, persist, return a typed outcome.
//! Confirm and reschedule additionally serialize their
//! check-then-write section behind the shared [`ScheduleLock`].

mod confirm_session;
mod delete_session;
mod list_sessions;
mod propose_session;
mod reschedule_session;
mod unschedule_session;

pub use confirm_session::{AttendeeInput, ConfirmSessionCommand, ConfirmSessionHandler};
pub use delete_session::{DeleteSessionCommand, DeleteSessionHandler};
pub use list_sessions::{
    ListAllSessionsHandler, ListAllSessionsQuery, ListOwnSessionsHandler, ListOwnSessionsQuery,
};
pub use propose_session::{ProposeSessionCommand, ProposeSessionHandler};
pub use reschedule_session::{RescheduleSessionCommand, RescheduleSessionHandler};
pub use unschedule_session::{UnscheduleSessionCommand, UnscheduleSessionHandler};

use std::sync::Arc;

/// Mutual exclusion for transitions into (or within) `Scheduled` status.
///
/// The conflict check and the committing write are not atomic against the
/// store on their own: two overlapping confirms could both read an empty
/// conflict set and both commit. Handlers that commit calendar time hold
/// this lock across the read-check-write sequence, giving at-most-one
/// winner; the loser observes the first writer's commit and gets
/// `Conflict`.
#[derive(Debug, Clone, Default)]
pub struct ScheduleLock {
    inner: Arc<tokio::sync::Mutex<()>>,
}

impl ScheduleLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for a check-then-write section.
    pub async fn acquire(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.inner.lock().await
    }
}
