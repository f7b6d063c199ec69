//! In-memory store implementations.
//!
//! Backing for tests and local development. A `RwLock`-guarded map is
//! enough here: serialization of conflicting writers is the job of the
//! application-level `ScheduleLock`, not the store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, SessionStatus, UserId};
use crate::domain::session::Session;
use crate::domain::user::User;
use crate::ports::{SessionStore, UserStore};

/// In-memory implementation of [`SessionStore`].
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records (test helper).
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sorted_newest_first(mut sessions: Vec<Session>) -> Vec<Session> {
        sessions.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        sessions
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: &Session) -> Result<(), DomainError> {
        self.sessions
            .write()
            .unwrap()
            .insert(session.id(), session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        Ok(self.sessions.read().unwrap().get(id).cloned())
    }

    async fn find_overlap_candidates(
        &self,
        exclude_id: SessionId,
        status: SessionStatus,
    ) -> Result<Vec<Session>, DomainError> {
        Ok(self
            .sessions
            .read()
            .unwrap()
            .values()
            .filter(|s| s.id() != exclude_id && s.status() == status)
            .cloned()
            .collect())
    }

    async fn find_by_creator(&self, creator: &UserId) -> Result<Vec<Session>, DomainError> {
        let sessions = self
            .sessions
            .read()
            .unwrap()
            .values()
            .filter(|s| s.is_created_by(creator))
            .cloned()
            .collect();
        Ok(Self::sorted_newest_first(sessions))
    }

    async fn find_all(&self) -> Result<Vec<Session>, DomainError> {
        let sessions = self.sessions.read().unwrap().values().cloned().collect();
        Ok(Self::sorted_newest_first(sessions))
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().unwrap();
        if !sessions.contains_key(&session.id()) {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            ));
        }
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().unwrap();
        if sessions.remove(id).is_none() {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", id),
            ));
        }
        Ok(())
    }
}

/// In-memory implementation of [`UserStore`].
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().unwrap();
        if users.values().any(|u| u.email() == user.email()) {
            return Err(DomainError::database(format!(
                "duplicate email: {}",
                user.email()
            )));
        }
        users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .values()
            .find(|u| u.email() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().unwrap().get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Role, Timestamp};
    use crate::domain::session::TimeSlot;

    fn make_session(creator: UserId, start_min: i64, end_min: i64) -> Session {
        let base = Timestamp::from_unix_secs(0);
        let slot =
            TimeSlot::new(base.add_minutes(start_min), base.add_minutes(end_min)).unwrap();
        Session::propose(SessionId::new(), creator, "user@example.com", slot, 60).unwrap()
    }

    #[tokio::test]
    async fn insert_then_find_by_id() {
        let store = InMemorySessionStore::new();
        let session = make_session(UserId::new(), 600, 660);

        store.insert(&session).await.unwrap();
        let found = store.find_by_id(&session.id()).await.unwrap();
        assert_eq!(found, Some(session));
    }

    #[tokio::test]
    async fn find_by_id_misses_unknown() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.find_by_id(&SessionId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn overlap_candidates_filter_by_status_and_exclude_id() {
        let store = InMemorySessionStore::new();
        let creator = UserId::new();

        let pending = make_session(creator, 0, 60);
        let mut scheduled = make_session(creator, 120, 180);
        scheduled.confirm(vec![]).unwrap();
        let mut excluded = make_session(creator, 240, 300);
        excluded.confirm(vec![]).unwrap();

        store.insert(&pending).await.unwrap();
        store.insert(&scheduled).await.unwrap();
        store.insert(&excluded).await.unwrap();

        let candidates = store
            .find_overlap_candidates(excluded.id(), SessionStatus::Scheduled)
            .await
            .unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id(), scheduled.id());
    }

    #[tokio::test]
    async fn find_by_creator_scopes_to_owner() {
        let store = InMemorySessionStore::new();
        let alice = UserId::new();
        let bob = UserId::new();

        store.insert(&make_session(alice, 0, 60)).await.unwrap();
        store.insert(&make_session(bob, 120, 180)).await.unwrap();

        let mine = store.find_by_creator(&alice).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert!(mine[0].is_created_by(&alice));
    }

    #[tokio::test]
    async fn update_unknown_session_is_not_found() {
        let store = InMemorySessionStore::new();
        let session = make_session(UserId::new(), 0, 60);
        let err = store.update(&session).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = InMemorySessionStore::new();
        let session = make_session(UserId::new(), 0, 60);
        store.insert(&session).await.unwrap();

        store.delete(&session.id()).await.unwrap();
        assert!(store.is_empty());
        assert!(store.delete(&session.id()).await.is_err());
    }

    #[tokio::test]
    async fn user_store_rejects_duplicate_email() {
        let store = InMemoryUserStore::new();
        let user = User::register(
            UserId::new(),
            "Alice",
            "alice@example.com",
            "$2b$10$hash",
            Role::Requester,
        )
        .unwrap();
        let dup = User::register(
            UserId::new(),
            "Alice2",
            "alice@example.com",
            "$2b$10$hash",
            Role::Requester,
        )
        .unwrap();

        store.insert(&user).await.unwrap();
        assert!(store.insert(&dup).await.is_err());

        let found = store.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id()), Some(user.id()));
    }
}
