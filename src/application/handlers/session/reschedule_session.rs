//! RescheduleSessionHandler - replaces the interval of a scheduled
//! session, keeping the no-overlap invariant.

use std::sync::Arc;

use crate::domain::foundation::{Actor, SessionId, SessionStatus, Timestamp};
use crate::domain::session::{
    can_perform, conflicts, Session, SessionAction, SessionError, TimeSlot,
};
use crate::ports::SessionStore;

use super::ScheduleLock;

/// Command to reschedule a session.
#[derive(Debug, Clone)]
pub struct RescheduleSessionCommand {
    pub actor: Actor,
    pub session_id: SessionId,
    pub new_start: Timestamp,
    pub new_end: Timestamp,
}

/// Handler for rescheduling sessions.
pub struct RescheduleSessionHandler {
    store: Arc<dyn SessionStore>,
    lock: ScheduleLock,
}

impl RescheduleSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, lock: ScheduleLock) -> Self {
        Self { store, lock }
    }

    pub async fn handle(
        &self,
        cmd: RescheduleSessionCommand,
    ) -> Result<Session, SessionError> {
        let new_slot = TimeSlot::new(cmd.new_start, cmd.new_end)?;

        // The new interval re-enters the committed calendar, so the
        // check-then-write section shares the confirm lock.
        let _guard = self.lock.acquire().await;

        let mut session = self
            .store
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionError::NotFound(cmd.session_id))?;

        if !can_perform(&cmd.actor, SessionAction::Reschedule, Some(&session)) {
            return Err(SessionError::unauthorized());
        }

        if session.status() != SessionStatus::Scheduled {
            return Err(SessionError::invalid_state(session.status(), "reschedule"));
        }

        let committed = self
            .store
            .find_overlap_candidates(session.id(), SessionStatus::Scheduled)
            .await?;
        if conflicts(&new_slot, committed.iter().map(|s| s.slot())) {
            tracing::warn!(session = %session.id(), slot = %new_slot, "reschedule conflict");
            return Err(SessionError::conflict(
                "Conflict with existing confirmed sessions",
            ));
        }

        session.reschedule(new_slot)?;
        self.store.update(&session).await?;

        tracing::info!(session = %session.id(), actor = %cmd.actor.id, "session rescheduled");
        Ok(session)
    }
}
