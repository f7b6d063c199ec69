//! ProposeSessionHandler - a requester proposes a new pending session.

use std::sync::Arc;

use crate::domain::foundation::{Actor, SessionId, SessionStatus, Timestamp};
use crate::domain::session::{can_perform, Session, SessionAction, SessionError, TimeSlot};
use crate::ports::SessionStore;

/// Command to propose a session.
#[derive(Debug, Clone)]
pub struct ProposeSessionCommand {
    pub actor: Actor,
    pub start: Timestamp,
    pub end: Timestamp,
    pub duration_minutes: u32,
}

/// Handler for proposing sessions.
pub struct ProposeSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl ProposeSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ProposeSessionCommand) -> Result<Session, SessionError> {
        if !can_perform(&cmd.actor, SessionAction::Propose, None) {
            return Err(SessionError::unauthorized());
        }

        let slot = TimeSlot::new(cmd.start, cmd.end)?;

        // Duplicate-proposal policy: an exact (start, end) match among the
        // same requester's pending proposals is rejected. Scheduled and
        // canceled records do not block; overlapping-but-different pending
        // proposals are allowed.
        let existing = self.store.find_by_creator(&cmd.actor.id).await?;
        if existing
            .iter()
            .filter(|s| s.status() == SessionStatus::Pending)
            .any(|s| s.slot() == &slot)
        {
            tracing::info!(actor = %cmd.actor.id, slot = %slot, "duplicate proposal rejected");
            return Err(SessionError::conflict("Time slot already booked"));
        }

        let session = Session::propose(
            SessionId::new(),
            cmd.actor.id,
            cmd.actor.email.clone(),
            slot,
            cmd.duration_minutes,
        )?;

        self.store.insert(&session).await?;

        tracing::info!(session = %session.id(), actor = %cmd.actor.id, "session proposed");
        Ok(session)
    }
}
