//! HTTP routes for authentication endpoints.

use axum::{routing::post, Router};

use super::handlers::{admin_login, login, signout, AuthHandlers};

/// Creates the auth router with all endpoints.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/admin/login", post(admin_login))
        .route("/signout", post(signout))
        .with_state(handlers)
}
