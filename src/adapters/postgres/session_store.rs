//! PostgreSQL implementation of `SessionStore`.
//!
//! The `sessions` table carries a partial GiST exclusion constraint over
//! `tstzrange(start_at, end_at)` for rows in `scheduled` status (see
//! migrations). The application-level lock already serializes committing
//! writers inside one process; the constraint rejects a second committing
//! writer from another process, surfacing as `BookingConflict`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, SessionId, SessionStatus, Timestamp, UserId,
};
use crate::domain::session::{ScheduledSlot, Session, TimeSlot};
use crate::ports::SessionStore;

/// PostgreSQL implementation of [`SessionStore`].
#[derive(Clone)]
pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = "id, created_by, participant_email, start_at, end_at, \
     duration_minutes, status, scheduled_slots, created_at, updated_at";

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn insert(&self, session: &Session) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                id, created_by, participant_email, start_at, end_at,
                duration_minutes, status, scheduled_slots, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.created_by().as_uuid())
        .bind(session.participant_email())
        .bind(session.slot().start().as_datetime())
        .bind(session.slot().end().as_datetime())
        .bind(i64::from(session.duration_minutes()))
        .bind(session.status().as_str())
        .bind(slots_to_json(session.scheduled_slots())?)
        .bind(session.created_at().as_datetime())
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, "Failed to insert session"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM sessions WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch session: {}", e)))?;

        row.map(row_to_session).transpose()
    }

    async fn find_overlap_candidates(
        &self,
        exclude_id: SessionId,
        status: SessionStatus,
    ) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM sessions WHERE id <> $1 AND status = $2",
            SELECT_COLUMNS
        ))
        .bind(exclude_id.as_uuid())
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to fetch overlap candidates: {}", e))
        })?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn find_by_creator(&self, creator: &UserId) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM sessions WHERE created_by = $1 ORDER BY created_at DESC",
            SELECT_COLUMNS
        ))
        .bind(creator.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch sessions: {}", e)))?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn find_all(&self) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM sessions ORDER BY created_at DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch sessions: {}", e)))?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE sessions SET
                start_at = $2,
                end_at = $3,
                status = $4,
                scheduled_slots = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.slot().start().as_datetime())
        .bind(session.slot().end().as_datetime())
        .bind(session.status().as_str())
        .bind(slots_to_json(session.scheduled_slots())?)
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, "Failed to update session"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete session: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", id),
            ));
        }

        Ok(())
    }
}

/// Maps a write failure, distinguishing exclusion/unique violations from
/// plain infrastructure errors.
fn write_error(e: sqlx::Error, context: &str) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        // 23P01 exclusion_violation, 23505 unique_violation
        if matches!(db.code().as_deref(), Some("23P01") | Some("23505")) {
            return DomainError::new(
                ErrorCode::BookingConflict,
                "Conflict with existing confirmed sessions",
            );
        }
    }
    DomainError::database(format!("{}: {}", context, e))
}

fn slots_to_json(slots: &[ScheduledSlot]) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(slots)
        .map_err(|e| DomainError::database(format!("Failed to encode slots: {}", e)))
}

fn row_to_session(row: PgRow) -> Result<Session, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(e.to_string()))?;
    let created_by: uuid::Uuid = row
        .try_get("created_by")
        .map_err(|e| DomainError::database(e.to_string()))?;
    let participant_email: String = row
        .try_get("participant_email")
        .map_err(|e| DomainError::database(e.to_string()))?;
    let start_at: DateTime<Utc> = row
        .try_get("start_at")
        .map_err(|e| DomainError::database(e.to_string()))?;
    let end_at: DateTime<Utc> = row
        .try_get("end_at")
        .map_err(|e| DomainError::database(e.to_string()))?;
    let duration_minutes: i64 = row
        .try_get("duration_minutes")
        .map_err(|e| DomainError::database(e.to_string()))?;
    let status: String = row
        .try_get("status")
        .map_err(|e| DomainError::database(e.to_string()))?;
    let scheduled_slots: serde_json::Value = row
        .try_get("scheduled_slots")
        .map_err(|e| DomainError::database(e.to_string()))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(e.to_string()))?;
    let updated_at: DateTime<Utc> = row
        .try_get("updated_at")
        .map_err(|e| DomainError::database(e.to_string()))?;

    let slot = TimeSlot::new(
        Timestamp::from_datetime(start_at),
        Timestamp::from_datetime(end_at),
    )
    .map_err(|e| DomainError::database(format!("Corrupt interval for {}: {}", id, e)))?;
    let status: SessionStatus = status
        .parse()
        .map_err(|e: String| DomainError::database(e))?;
    let scheduled_slots: Vec<ScheduledSlot> = serde_json::from_value(scheduled_slots)
        .map_err(|e| DomainError::database(format!("Corrupt slots for {}: {}", id, e)))?;
    let duration_minutes = duration_from_db(duration_minutes)
        .map_err(|e| DomainError::database(format!("Corrupt duration for {}: {}", id, e)))?;

    Ok(Session::reconstitute(
        SessionId::from_uuid(id),
        UserId::from_uuid(created_by),
        participant_email,
        slot,
        duration_minutes,
        status,
        scheduled_slots,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

/// Stored durations are widened to BIGINT; anything outside `u32` range
/// is corrupt, not truncatable.
fn duration_from_db(raw: i64) -> Result<u32, String> {
    u32::try_from(raw).map_err(|_| format!("duration_minutes out of range: {}", raw))
}
