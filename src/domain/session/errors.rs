//! Session-specific error types.

use crate::domain::foundation::{
    DomainError, ErrorCode, SessionId, SessionStatus, ValidationError,
};

/// Typed outcomes of session service operations.
///
/// Every failure path returns one of these so the transport layer can map
/// it to a distinct user-visible status. Infrastructure failures are kept
/// separate from the domain errors: they signal "retry the operation", not
/// "change the request".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session id did not resolve.
    NotFound(SessionId),
    /// Role or ownership check failed.
    Unauthorized,
    /// Transition attempted from a status that disallows it.
    InvalidState {
        status: SessionStatus,
        action: &'static str,
    },
    /// Interval overlap or concurrent-write loss.
    Conflict(String),
    /// Malformed input.
    Validation(ValidationError),
    /// Unexpected store failure.
    Infrastructure(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }

    pub fn unauthorized() -> Self {
        SessionError::Unauthorized
    }

    pub fn invalid_state(status: SessionStatus, action: &'static str) -> Self {
        SessionError::InvalidState { status, action }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        SessionError::Conflict(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }

    /// Maps to the shared error code taxonomy.
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::Unauthorized => ErrorCode::Forbidden,
            SessionError::InvalidState { .. } => ErrorCode::InvalidStateTransition,
            SessionError::Conflict(_) => ErrorCode::BookingConflict,
            SessionError::Validation(_) => ErrorCode::ValidationFailed,
            SessionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Session not found: {}", id),
            SessionError::Unauthorized => "Not authorized for this session".to_string(),
            SessionError::InvalidState { status, action } => {
                format!("Cannot {} a {} session", action, status)
            }
            SessionError::Conflict(msg) => msg.clone(),
            SessionError::Validation(err) => err.to_string(),
            SessionError::Infrastructure(msg) => format!("Store error: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::Validation(err)
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SessionNotFound => {
                // Store-reported miss without a parseable id.
                SessionError::Infrastructure(err.to_string())
            }
            ErrorCode::ValidationFailed => SessionError::Validation(
                ValidationError::invalid_format("session", err.message),
            ),
            ErrorCode::BookingConflict => SessionError::Conflict(err.message),
            _ => SessionError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_taxonomy() {
        assert_eq!(
            SessionError::not_found(SessionId::new()).code(),
            ErrorCode::SessionNotFound
        );
        assert_eq!(SessionError::unauthorized().code(), ErrorCode::Forbidden);
        assert_eq!(
            SessionError::invalid_state(SessionStatus::Pending, "reschedule").code(),
            ErrorCode::InvalidStateTransition
        );
        assert_eq!(
            SessionError::conflict("overlap").code(),
            ErrorCode::BookingConflict
        );
        assert_eq!(
            SessionError::from(ValidationError::EmptyInterval).code(),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            SessionError::infrastructure("io").code(),
            ErrorCode::DatabaseError
        );
    }

    #[test]
    fn invalid_state_message_names_status_and_action() {
        let err = SessionError::invalid_state(SessionStatus::Pending, "reschedule");
        assert_eq!(err.message(), "Cannot reschedule a pending session");
    }

    #[test]
    fn store_conflict_maps_to_conflict() {
        let err: SessionError =
            DomainError::new(ErrorCode::BookingConflict, "Slot taken").into();
        assert!(matches!(err, SessionError::Conflict(_)));
    }

    #[test]
    fn database_error_maps_to_infrastructure() {
        let err: SessionError = DomainError::database("connection reset").into();
        assert!(matches!(err, SessionError::Infrastructure(_)));
    }
}
