//! Session store port.
//!
//! The core requires a durable store of session records queryable by id,
//! creator, and status. Storage technology is the adapter's concern; the
//! only consistency requirement is that `find_by_id` reflects the latest
//! committed write within a single logical operation.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId, SessionStatus, UserId};
use crate::domain::session::Session;

/// Store contract for session records.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Inserts a new session record.
    ///
    /// # Errors
    ///
    /// - `BookingConflict` if a store-level exclusion constraint rejects
    ///   the write
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, session: &Session) -> Result<(), DomainError>;

    /// Fetches a session by its id. Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Returns every session in the given status other than `exclude_id`.
    ///
    /// This is the snapshot the overlap checker filters; ordering is
    /// irrelevant to the conflict decision.
    async fn find_overlap_candidates(
        &self,
        exclude_id: SessionId,
        status: SessionStatus,
    ) -> Result<Vec<Session>, DomainError>;

    /// Returns all sessions created by the given user, newest first.
    async fn find_by_creator(&self, creator: &UserId) -> Result<Vec<Session>, DomainError>;

    /// Returns all sessions, newest first.
    async fn find_all(&self) -> Result<Vec<Session>, DomainError>;

    /// Persists the current state of an existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the record does not exist
    /// - `BookingConflict` if a store-level exclusion constraint rejects
    ///   the write
    /// - `DatabaseError` on persistence failure
    async fn update(&self, session: &Session) -> Result<(), DomainError>;

    /// Removes a session record permanently.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the record does not exist
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;
}
