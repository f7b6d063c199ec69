//! List handlers - approver-wide and requester-scoped session queries.

use std::sync::Arc;

use crate::domain::foundation::Actor;
use crate::domain::session::{can_perform, Session, SessionAction, SessionError};
use crate::ports::SessionStore;

/// Query for all sessions (approver-only).
#[derive(Debug, Clone)]
pub struct ListAllSessionsQuery {
    pub actor: Actor,
}

/// Handler returning every session, newest first.
pub struct ListAllSessionsHandler {
    store: Arc<dyn SessionStore>,
}

impl ListAllSessionsHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListAllSessionsQuery) -> Result<Vec<Session>, SessionError> {
        if !can_perform(&query.actor, SessionAction::ListAll, None) {
            return Err(SessionError::unauthorized());
        }
        Ok(self.store.find_all().await?)
    }
}

/// Query for the caller's own sessions.
#[derive(Debug, Clone)]
pub struct ListOwnSessionsQuery {
    pub actor: Actor,
}

/// Handler returning the caller's sessions, newest first.
///
/// An empty list is a valid, non-error result.
pub struct ListOwnSessionsHandler {
    store: Arc<dyn SessionStore>,
}

impl ListOwnSessionsHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListOwnSessionsQuery) -> Result<Vec<Session>, SessionError> {
        Ok(self.store.find_by_creator(&query.actor.id).await?)
    }
}
