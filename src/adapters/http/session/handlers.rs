//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::session::{
    AttendeeInput, ConfirmSessionCommand, ConfirmSessionHandler, DeleteSessionCommand,
    DeleteSessionHandler, ListAllSessionsHandler, ListAllSessionsQuery, ListOwnSessionsHandler,
    ListOwnSessionsQuery, ProposeSessionCommand, ProposeSessionHandler, RescheduleSessionCommand,
    RescheduleSessionHandler, UnscheduleSessionCommand, UnscheduleSessionHandler,
};
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;

use super::dto::{
    ConfirmSessionRequest, ErrorResponse, MessageResponse, ProposeSessionRequest,
    RescheduleSessionRequest, SessionListResponse, SessionResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    propose_handler: Arc<ProposeSessionHandler>,
    confirm_handler: Arc<ConfirmSessionHandler>,
    reschedule_handler: Arc<RescheduleSessionHandler>,
    unschedule_handler: Arc<UnscheduleSessionHandler>,
    delete_handler: Arc<DeleteSessionHandler>,
    list_all_handler: Arc<ListAllSessionsHandler>,
    list_own_handler: Arc<ListOwnSessionsHandler>,
}

impl SessionHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        propose_handler: Arc<ProposeSessionHandler>,
        confirm_handler: Arc<ConfirmSessionHandler>,
        reschedule_handler: Arc<RescheduleSessionHandler>,
        unschedule_handler: Arc<UnscheduleSessionHandler>,
        delete_handler: Arc<DeleteSessionHandler>,
        list_all_handler: Arc<ListAllSessionsHandler>,
        list_own_handler: Arc<ListOwnSessionsHandler>,
    ) -> Self {
        Self {
            propose_handler,
            confirm_handler,
            reschedule_handler,
            unschedule_handler,
            delete_handler,
            list_all_handler,
            list_own_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Propose a new session
pub async fn propose_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(actor): RequireAuth,
    Json(req): Json<ProposeSessionRequest>,
) -> Response {
    let cmd = ProposeSessionCommand {
        actor,
        start: req.start,
        end: req.end,
        duration_minutes: req.duration_minutes,
    };

    match handlers.propose_handler.handle(cmd).await {
        Ok(session) => {
            (StatusCode::CREATED, Json(SessionResponse::from(&session))).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/sessions - List every session (approver only)
pub async fn list_all_sessions(
    State(handlers): State<SessionHandlers>,
    RequireAuth(actor): RequireAuth,
) -> Response {
    match handlers
        .list_all_handler
        .handle(ListAllSessionsQuery { actor })
        .await
    {
        Ok(sessions) => {
            (StatusCode::OK, Json(SessionListResponse::new(&sessions))).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/sessions/mine - List the caller's sessions
pub async fn list_own_sessions(
    State(handlers): State<SessionHandlers>,
    RequireAuth(actor): RequireAuth,
) -> Response {
    match handlers
        .list_own_handler
        .handle(ListOwnSessionsQuery { actor })
        .await
    {
        Ok(sessions) => {
            (StatusCode::OK, Json(SessionListResponse::new(&sessions))).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/sessions/:id/confirm - Commit a pending session to the calendar
pub async fn confirm_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(actor): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<ConfirmSessionRequest>,
) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ConfirmSessionCommand {
        actor,
        session_id,
        attendees: req
            .attendees
            .into_iter()
            .map(|a| AttendeeInput {
                name: a.name,
                email: a.email,
            })
            .collect(),
    };

    match handlers.confirm_handler.handle(cmd).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// PATCH /api/sessions/:id/reschedule - Move a scheduled session
pub async fn reschedule_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(actor): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<RescheduleSessionRequest>,
) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = RescheduleSessionCommand {
        actor,
        session_id,
        new_start: req.start,
        new_end: req.end,
    };

    match handlers.reschedule_handler.handle(cmd).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/sessions/:id/unschedule - Cancel a scheduled session
pub async fn unschedule_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(actor): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .unschedule_handler
        .handle(UnscheduleSessionCommand { actor, session_id })
        .await
    {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// DELETE /api/sessions/:id - Remove a session record
pub async fn delete_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(actor): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteSessionCommand { actor, session_id })
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse::new("Session deleted")),
        )
            .into_response(),
        Err(e) => handle_session_error(e),
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_session_error(error: SessionError) -> Response {
    let status = match &error {
        SessionError::Validation(_) | SessionError::InvalidState { .. } => {
            StatusCode::BAD_REQUEST
        }
        SessionError::Unauthorized => StatusCode::FORBIDDEN,
        SessionError::NotFound(_) => StatusCode::NOT_FOUND,
        SessionError::Conflict(_) => StatusCode::CONFLICT,
        SessionError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = ErrorResponse::new(error.code().to_string(), error.message());
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SessionStatus, ValidationError};

    #[test]
    fn conflict_maps_to_409() {
        let response = handle_session_error(SessionError::conflict("Time slot already booked"));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_session_error(SessionError::not_found(SessionId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unauthorized_maps_to_403() {
        let response = handle_session_error(SessionError::unauthorized());
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn invalid_state_maps_to_400() {
        let response = handle_session_error(SessionError::invalid_state(
            SessionStatus::Canceled,
            "confirm",
        ));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_maps_to_400() {
        let response =
            handle_session_error(SessionError::Validation(ValidationError::EmptyInterval));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_session_error(SessionError::infrastructure("connection reset"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
