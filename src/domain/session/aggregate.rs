//! Session aggregate entity.
//!
//! A session is a proposed meeting between a requester and an approver's
//! calendar. The aggregate is the single authority over status mutation:
//! every status write goes through a lifecycle method that consults the
//! `SessionStatus` state machine. Conflict checking against other sessions
//! happens in the application layer, which owns the store snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    SessionId, SessionStatus, StateMachine, Timestamp, UserId, ValidationError,
};

use super::errors::SessionError;
use super::slot::TimeSlot;

/// Attendee recorded on a confirmed slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
    pub email: String,
}

impl Attendee {
    /// Creates an attendee, rejecting blank fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        Ok(Self { name, email })
    }
}

/// Confirmed slot record appended at confirmation time.
///
/// The sequence on the aggregate is additive history: nothing in the core
/// ever truncates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSlot {
    pub slot: TimeSlot,
    pub attendees: Vec<Attendee>,
}

/// Session aggregate - a time-bounded meeting proposal.
///
/// # Invariants
///
/// - `slot.start < slot.end` (held by `TimeSlot`)
/// - `created_by` and `participant_email` are immutable after creation
/// - status changes only through `confirm`, `reschedule`, `unschedule`
/// - `scheduled_slots` only grows, and only via `confirm`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    created_by: UserId,
    participant_email: String,
    slot: TimeSlot,
    duration_minutes: u32,
    status: SessionStatus,
    scheduled_slots: Vec<ScheduledSlot>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Session {
    /// Creates a new pending session proposal.
    pub fn propose(
        id: SessionId,
        created_by: UserId,
        participant_email: impl Into<String>,
        slot: TimeSlot,
        duration_minutes: u32,
    ) -> Result<Self, ValidationError> {
        let participant_email = participant_email.into();
        if participant_email.trim().is_empty() {
            return Err(ValidationError::empty_field("participant_email"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            created_by,
            participant_email,
            slot,
            duration_minutes,
            status: SessionStatus::Pending,
            scheduled_slots: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a session from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SessionId,
        created_by: UserId,
        participant_email: String,
        slot: TimeSlot,
        duration_minutes: u32,
        status: SessionStatus,
        scheduled_slots: Vec<ScheduledSlot>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            created_by,
            participant_email,
            slot,
            duration_minutes,
            status,
            scheduled_slots,
            created_at,
            updated_at,
        }
    }

    // Accessors

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn created_by(&self) -> UserId {
        self.created_by
    }

    pub fn participant_email(&self) -> &str {
        &self.participant_email
    }

    pub fn slot(&self) -> &TimeSlot {
        &self.slot
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn scheduled_slots(&self) -> &[ScheduledSlot] {
        &self.scheduled_slots
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Checks if the given user created this session.
    pub fn is_created_by(&self, user_id: &UserId) -> bool {
        &self.created_by == user_id
    }

    // Lifecycle transitions

    /// Confirms a pending session, committing it to calendar time.
    ///
    /// Appends exactly one slot record with the supplied attendees. The
    /// caller must have already established that no scheduled session
    /// overlaps this one.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the session is not `Pending`
    pub fn confirm(&mut self, attendees: Vec<Attendee>) -> Result<(), SessionError> {
        self.status = self
            .status
            .transition_to(SessionStatus::Scheduled)
            .map_err(|_| SessionError::invalid_state(self.status, "confirm"))?;

        self.scheduled_slots.push(ScheduledSlot {
            slot: self.slot,
            attendees,
        });
        self.touch();
        Ok(())
    }

    /// Replaces the interval of a scheduled session.
    ///
    /// The session stays `Scheduled`; the caller must have already
    /// conflict-checked the new interval against all other scheduled
    /// sessions (excluding this one).
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the session is not `Scheduled`
    pub fn reschedule(&mut self, new_slot: TimeSlot) -> Result<(), SessionError> {
        if self.status != SessionStatus::Scheduled {
            return Err(SessionError::invalid_state(self.status, "reschedule"));
        }
        self.slot = new_slot;
        self.touch();
        Ok(())
    }

    /// Cancels a scheduled session, releasing its calendar time.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the session is not `Scheduled`
    pub fn unschedule(&mut self) -> Result<(), SessionError> {
        self.status = self
            .status
            .transition_to(SessionStatus::Canceled)
            .map_err(|_| SessionError::invalid_state(self.status, "unschedule"))?;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
