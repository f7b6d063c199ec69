//! DeleteSessionHandler - a requester permanently removes their own
//! session record.

use std::sync::Arc;

use crate::domain::foundation::{Actor, SessionId};
use crate::domain::session::{can_perform, SessionAction, SessionError};
use crate::ports::SessionStore;

/// Command to delete a session.
#[derive(Debug, Clone)]
pub struct DeleteSessionCommand {
    pub actor: Actor,
    pub session_id: SessionId,
}

/// Handler for deleting sessions.
///
/// Deletion is destructive, not a status transition. It is gated on
/// creator ownership only; there is no status restriction.
pub struct DeleteSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl DeleteSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteSessionCommand) -> Result<(), SessionError> {
        let session = self
            .store
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionError::NotFound(cmd.session_id))?;

        if !can_perform(&cmd.actor, SessionAction::Delete, Some(&session)) {
            tracing::warn!(session = %session.id(), actor = %cmd.actor.id, "delete denied");
            return Err(SessionError::unauthorized());
        }

        self.store.delete(&cmd.session_id).await?;

        tracing::info!(session = %cmd.session_id, actor = %cmd.actor.id, "session deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::foundation::{Role, Timestamp, UserId};
    use crate::domain::session::{Session, TimeSlot};

    async fn seed(store: &InMemorySessionStore, creator: UserId) -> Session {
        let base = Timestamp::from_unix_secs(0);
        let slot = TimeSlot::new(base.add_minutes(600), base.add_minutes(660)).unwrap();
        let session =
            Session::propose(SessionId::new(), creator, "user@example.com", slot, 60).unwrap();
        store.insert(&session).await.unwrap();
        session
    }

    #[tokio::test]
    async fn creator_deletes_own_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let creator = UserId::new();
        let session = seed(&store, creator).await;
        let handler = DeleteSessionHandler::new(store.clone());

        handler
            .handle(DeleteSessionCommand {
                actor: Actor::new(creator, "user@example.com", Role::Requester),
                session_id: session.id(),
            })
            .await
            .unwrap();

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn non_creator_cannot_delete_and_record_remains() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = seed(&store, UserId::new()).await;
        let handler = DeleteSessionHandler::new(store.clone());

        let err = handler
            .handle(DeleteSessionCommand {
                actor: Actor::new(UserId::new(), "other@example.com", Role::Requester),
                session_id: session.id(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::Unauthorized);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn approver_cannot_delete_someone_elses_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let session = seed(&store, UserId::new()).await;
        let handler = DeleteSessionHandler::new(store.clone());

        let err = handler
            .handle(DeleteSessionCommand {
                actor: Actor::new(UserId::new(), "admin@example.com", Role::Approver),
                session_id: session.id(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::Unauthorized);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let handler = DeleteSessionHandler::new(Arc::new(InMemorySessionStore::new()));
        let missing = SessionId::new();

        let err = handler
            .handle(DeleteSessionCommand {
                actor: Actor::new(UserId::new(), "user@example.com", Role::Requester),
                session_id: missing,
            })
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::NotFound(missing));
    }
}
