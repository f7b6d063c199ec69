//! HTTP routes for session endpoints.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::{
    confirm_session, delete_session, list_all_sessions, list_own_sessions, propose_session,
    reschedule_session, unschedule_session, SessionHandlers,
};

/// Creates the session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", post(propose_session).get(list_all_sessions))
        .route("/mine", get(list_own_sessions))
        .route("/:id/confirm", post(confirm_session))
        .route("/:id/reschedule", patch(reschedule_session))
        .route("/:id/unschedule", post(unschedule_session))
        .route("/:id", delete(delete_session))
        .with_state(handlers)
}
