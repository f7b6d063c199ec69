//! Request and response DTOs for session endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::session::{ScheduledSlot, Session};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
pub struct ProposeSessionRequest {
    pub start: Timestamp,
    pub end: Timestamp,
    pub duration_minutes: u32,
}

#[derive(Debug, Deserialize)]
pub struct AttendeeDto {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmSessionRequest {
    #[serde(default)]
    pub attendees: Vec<AttendeeDto>,
}

#[derive(Debug, Deserialize)]
pub struct RescheduleSessionRequest {
    pub start: Timestamp,
    pub end: Timestamp,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
pub struct ScheduledSlotResponse {
    pub start: Timestamp,
    pub end: Timestamp,
    pub attendees: Vec<AttendeeResponse>,
}

#[derive(Debug, Serialize)]
pub struct AttendeeResponse {
    pub name: String,
    pub email: String,
}

impl From<&ScheduledSlot> for ScheduledSlotResponse {
    fn from(slot: &ScheduledSlot) -> Self {
        Self {
            start: slot.slot.start(),
            end: slot.slot.end(),
            attendees: slot
                .attendees
                .iter()
                .map(|a| AttendeeResponse {
                    name: a.name.clone(),
                    email: a.email.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub created_by: String,
    pub participant_email: String,
    pub start: Timestamp,
    pub end: Timestamp,
    pub duration_minutes: u32,
    pub status: String,
    pub scheduled_slots: Vec<ScheduledSlotResponse>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id().to_string(),
            created_by: session.created_by().to_string(),
            participant_email: session.participant_email().to_string(),
            start: session.slot().start(),
            end: session.slot().end(),
            duration_minutes: session.duration_minutes(),
            status: session.status().as_str().to_string(),
            scheduled_slots: session.scheduled_slots().iter().map(Into::into).collect(),
            created_at: session.created_at(),
            updated_at: session.updated_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionResponse>,
    pub count: usize,
}

impl SessionListResponse {
    pub fn new(sessions: &[Session]) -> Self {
        Self {
            count: sessions.len(),
            sessions: sessions.iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}
