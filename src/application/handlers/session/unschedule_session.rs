//! UnscheduleSessionHandler - an approver cancels a scheduled session.

use std::sync::Arc;

use crate::domain::foundation::{Actor, SessionId};
use crate::domain::session::{can_perform, Session, SessionAction, SessionError};
use crate::ports::SessionStore;

/// Command to cancel a scheduled session.
#[derive(Debug, Clone)]
pub struct UnscheduleSessionCommand {
    pub actor: Actor,
    pub session_id: SessionId,
}

/// Handler for unscheduling sessions.
pub struct UnscheduleSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl UnscheduleSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UnscheduleSessionCommand) -> Result<Session, SessionError> {
        if !can_perform(&cmd.actor, SessionAction::Unschedule, None) {
            return Err(SessionError::unauthorized());
        }

        let mut session = self
            .store
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionError::NotFound(cmd.session_id))?;

        session.unschedule()?;
        self.store.update(&session).await?;

        tracing::info!(session = %session.id(), actor = %cmd.actor.id, "session unscheduled");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::foundation::{Role, SessionStatus, Timestamp, UserId};
    use crate::domain::session::TimeSlot;

    fn approver() -> Actor {
        Actor::new(UserId::new(), "admin@example.com", Role::Approver)
    }

    async fn seed(store: &InMemorySessionStore, confirmed: bool) -> Session {
        let base = Timestamp::from_unix_secs(0);
        let slot = TimeSlot::new(base.add_minutes(600), base.add_minutes(660)).unwrap();
        let mut session =
            Session::propose(SessionId::new(), UserId::new(), "user@example.com", slot, 60)
                .unwrap();
        if confirmed {
            session.confirm(vec![]).unwrap();
        }
        store.insert(&session).await.unwrap();
        session
    }

    #[tokio::test]
    async fn unschedule_cancels_scheduled_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = seed(&store, true).await;
        let handler = UnscheduleSessionHandler::new(store.clone());

        let canceled = handler
            .handle(UnscheduleSessionCommand {
                actor: approver(),
                session_id: session.id(),
            })
            .await
            .unwrap();

        assert_eq!(canceled.status(), SessionStatus::Canceled);
        let stored = store.find_by_id(&session.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), SessionStatus::Canceled);
    }

    #[tokio::test]
    async fn requester_cannot_unschedule() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = seed(&store, true).await;
        let handler = UnscheduleSessionHandler::new(store.clone());

        let err = handler
            .handle(UnscheduleSessionCommand {
                actor: Actor::new(UserId::new(), "user@example.com", Role::Requester),
                session_id: session.id(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::Unauthorized);
    }

    #[tokio::test]
    async fn unscheduling_pending_session_is_invalid_state() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = seed(&store, false).await;
        let handler = UnscheduleSessionHandler::new(store.clone());

        let err = handler
            .handle(UnscheduleSessionCommand {
                actor: approver(),
                session_id: session.id(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::InvalidState { .. }));
        let stored = store.find_by_id(&session.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), SessionStatus::Pending);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let handler = UnscheduleSessionHandler::new(Arc::new(InMemorySessionStore::new()));
        let missing = SessionId::new();

        let err = handler
            .handle(UnscheduleSessionCommand {
                actor: approver(),
                session_id: missing,
            })
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::NotFound(missing));
    }
}
