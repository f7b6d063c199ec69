//! HTTP adapters - REST API over the session service.

pub mod auth;
pub mod middleware;
pub mod session;

use axum::Router;

use crate::ports::TokenService;
use std::sync::Arc;

pub use auth::AuthHandlers;
pub use session::SessionHandlers;

/// Assembles the full API router.
///
/// Session routes sit behind the bearer-token middleware; auth routes are
/// public.
pub fn api_router(
    session_handlers: SessionHandlers,
    auth_handlers: AuthHandlers,
    tokens: Arc<dyn TokenService>,
) -> Router {
    let sessions = session::session_routes(session_handlers).layer(
        axum::middleware::from_fn_with_state(tokens, middleware::auth_middleware),
    );

    Router::new()
        .nest("/api/sessions", sessions)
        .nest("/api/auth", auth::auth_routes(auth_handlers))
}
