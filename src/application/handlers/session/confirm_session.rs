//! ConfirmSessionHandler - an approver commits a pending session to
//! calendar time.

use std::sync::Arc;

use crate::domain::foundation::{Actor, SessionId, SessionStatus};
use crate::domain::session::{
    can_perform, conflicts, Attendee, Session, SessionAction, SessionError,
};
use crate::ports::SessionStore;

use super::ScheduleLock;

/// Attendee supplied by the caller, validated by the handler.
#[derive(Debug, Clone)]
pub struct AttendeeInput {
    pub name: String,
    pub email: String,
}

/// Command to confirm a pending session.
#[derive(Debug, Clone)]
pub struct ConfirmSessionCommand {
    pub actor: Actor,
    pub session_id: SessionId,
    pub attendees: Vec<AttendeeInput>,
}

/// Handler for confirming sessions.
pub struct ConfirmSessionHandler {
    store: Arc<dyn SessionStore>,
    lock: ScheduleLock,
}

impl ConfirmSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, lock: ScheduleLock) -> Self {
        Self { store, lock }
    }

    pub async fn handle(&self, cmd: ConfirmSessionCommand) -> Result<Session, SessionError> {
        if !can_perform(&cmd.actor, SessionAction::Confirm, None) {
            return Err(SessionError::unauthorized());
        }

        let attendees = cmd
            .attendees
            .into_iter()
            .map(|a| Attendee::new(a.name, a.email))
            .collect::<Result<Vec<_>, _>>()?;

        // Everything from snapshot to commit happens under the lock.
        let _guard = self.lock.acquire().await;

        let mut session = self
            .store
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionError::NotFound(cmd.session_id))?;

        if session.status() != SessionStatus::Pending {
            return Err(SessionError::invalid_state(session.status(), "confirm"));
        }

        let committed = self
            .store
            .find_overlap_candidates(session.id(), SessionStatus::Scheduled)
            .await?;
        if conflicts(session.slot(), committed.iter().map(|s| s.slot())) {
            tracing::warn!(session = %session.id(), slot = %session.slot(), "confirm conflict");
            return Err(SessionError::conflict(
                "Conflict with existing confirmed sessions",
            ));
        }

        session.confirm(attendees)?;
        self.store.update(&session).await?;

        tracing::info!(session = %session.id(), actor = %cmd.actor.id, "session confirmed");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::foundation::{Role, Timestamp, UserId};
    use crate::domain::session::TimeSlot;

    fn approver() -> Actor {
        Actor::new(UserId::new(), "admin@example.com", Role::Approver)
    }

    fn attendee() -> AttendeeInput {
        AttendeeInput {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    async fn seed_pending(store: &InMemorySessionStore, start_min: i64, end_min: i64) -> Session {
        let base = Timestamp::from_unix_secs(0);
        let slot =
            TimeSlot::new(base.add_minutes(start_min), base.add_minutes(end_min)).unwrap();
        let session =
            Session::propose(SessionId::new(), UserId::new(), "user@example.com", slot, 60)
                .unwrap();
        store.insert(&session).await.unwrap();
        session
    }

    async fn seed_scheduled(
        store: &InMemorySessionStore,
        start_min: i64,
        end_min: i64,
    ) -> Session {
        let mut session = seed_pending(store, start_min, end_min).await;
        session.confirm(vec![]).unwrap();
        store.update(&session).await.unwrap();
        session
    }

    #[tokio::test]
    async fn confirm_transitions_and_appends_one_slot() {
        let store = Arc::new(InMemorySessionStore::new());
        let pending = seed_pending(&store, 600, 660).await;
        let handler = ConfirmSessionHandler::new(store.clone(), ScheduleLock::new());

        let confirmed = handler
            .handle(ConfirmSessionCommand {
                actor: approver(),
                session_id: pending.id(),
                attendees: vec![attendee()],
            })
            .await
            .unwrap();

        assert_eq!(confirmed.status(), SessionStatus::Scheduled);
        assert_eq!(confirmed.scheduled_slots().len(), 1);
        assert_eq!(confirmed.scheduled_slots()[0].attendees[0].name, "Alice");

        // Persisted state matches the returned aggregate.
        let stored = store.find_by_id(&pending.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), SessionStatus::Scheduled);
    }

    #[tokio::test]
    async fn requester_cannot_confirm() {
        let store = Arc::new(InMemorySessionStore::new());
        let pending = seed_pending(&store, 600, 660).await;
        let handler = ConfirmSessionHandler::new(store.clone(), ScheduleLock::new());

        let err = handler
            .handle(ConfirmSessionCommand {
                actor: Actor::new(UserId::new(), "user@example.com", Role::Requester),
                session_id: pending.id(),
                attendees: vec![],
            })
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::Unauthorized);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let handler = ConfirmSessionHandler::new(
            Arc::new(InMemorySessionStore::new()),
            ScheduleLock::new(),
        );
        let missing = SessionId::new();

        let err = handler
            .handle(ConfirmSessionCommand {
                actor: approver(),
                session_id: missing,
                attendees: vec![],
            })
            .await
            .unwrap_err();

        assert_eq!(err, SessionError::NotFound(missing));
    }

    #[tokio::test]
    async fn confirming_scheduled_session_is_invalid_state() {
        let store = Arc::new(InMemorySessionStore::new());
        let scheduled = seed_scheduled(&store, 600, 660).await;
        let handler = ConfirmSessionHandler::new(store.clone(), ScheduleLock::new());

        let err = handler
            .handle(ConfirmSessionCommand {
                actor: approver(),
                session_id: scheduled.id(),
                attendees: vec![],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::InvalidState { .. }));
    }

    #[tokio::test]
    async fn overlap_with_committed_session_is_conflict_and_changes_nothing() {
        let store = Arc::new(InMemorySessionStore::new());
        let committed = seed_scheduled(&store, 600, 660).await;
        let pending = seed_pending(&store, 630, 690).await;
        let handler = ConfirmSessionHandler::new(store.clone(), ScheduleLock::new());

        let err = handler
            .handle(ConfirmSessionCommand {
                actor: approver(),
                session_id: pending.id(),
                attendees: vec![attendee()],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::Conflict(_)));

        // Both statuses unchanged.
        let stored_pending = store.find_by_id(&pending.id()).await.unwrap().unwrap();
        let stored_committed = store.find_by_id(&committed.id()).await.unwrap().unwrap();
        assert_eq!(stored_pending.status(), SessionStatus::Pending);
        assert!(stored_pending.scheduled_slots().is_empty());
        assert_eq!(stored_committed.status(), SessionStatus::Scheduled);
    }

    #[tokio::test]
    async fn adjacent_committed_session_does_not_block_confirm() {
        let store = Arc::new(InMemorySessionStore::new());
        seed_scheduled(&store, 600, 660).await;
        let pending = seed_pending(&store, 660, 720).await;
        let handler = ConfirmSessionHandler::new(store.clone(), ScheduleLock::new());

        let confirmed = handler
            .handle(ConfirmSessionCommand {
                actor: approver(),
                session_id: pending.id(),
                attendees: vec![],
            })
            .await
            .unwrap();

        assert_eq!(confirmed.status(), SessionStatus::Scheduled);
    }

    #[tokio::test]
    async fn blank_attendee_is_validation_error() {
        let store = Arc::new(InMemorySessionStore::new());
        let pending = seed_pending(&store, 600, 660).await;
        let handler = ConfirmSessionHandler::new(store.clone(), ScheduleLock::new());

        let err = handler
            .handle(ConfirmSessionCommand {
                actor: approver(),
                session_id: pending.id(),
                attendees: vec![AttendeeInput {
                    name: String::new(),
                    email: "a@example.com".to_string(),
                }],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::Validation(_)));
    }

    #[tokio::test]
    async fn concurrent_overlapping_confirms_have_one_winner() {
        for _ in 0..50 {
            let store = Arc::new(InMemorySessionStore::new());
            let a = seed_pending(&store, 600, 660).await;
            let b = seed_pending(&store, 630, 690).await;

            let lock = ScheduleLock::new();
            let handler_a =
                Arc::new(ConfirmSessionHandler::new(store.clone(), lock.clone()));
            let handler_b =
                Arc::new(ConfirmSessionHandler::new(store.clone(), lock.clone()));

            let task_a = {
                let handler = handler_a.clone();
                let id = a.id();
                tokio::spawn(async move {
                    handler
                        .handle(ConfirmSessionCommand {
                            actor: Actor::new(
                                UserId::new(),
                                "admin@example.com",
                                Role::Approver,
                            ),
                            session_id: id,
                            attendees: vec![],
                        })
                        .await
                })
            };
            let task_b = {
                let handler = handler_b.clone();
                let id = b.id();
                tokio::spawn(async move {
                    handler
                        .handle(ConfirmSessionCommand {
                            actor: Actor::new(
                                UserId::new(),
                                "admin@example.com",
                                Role::Approver,
                            ),
                            session_id: id,
                            attendees: vec![],
                        })
                        .await
                })
            };

            let result_a = task_a.await.unwrap();
            let result_b = task_b.await.unwrap();

            let winners = [&result_a, &result_b]
                .iter()
                .filter(|r| r.is_ok())
                .count();
            assert_eq!(winners, 1, "exactly one confirm must win");

            let loser = if result_a.is_err() { result_a } else { result_b };
            assert!(matches!(loser.unwrap_err(), SessionError::Conflict(_)));
        }
    }
}
