//! HTTP handlers for authentication endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::session::dto::ErrorResponse;
use crate::application::handlers::auth::{LoginCommand, LoginHandler};
use crate::domain::foundation::{AuthError, Role};

use super::dto::{LoginRequest, LoginResponse, SignoutResponse};

#[derive(Clone)]
pub struct AuthHandlers {
    login_handler: Arc<LoginHandler>,
}

impl AuthHandlers {
    pub fn new(login_handler: Arc<LoginHandler>) -> Self {
        Self { login_handler }
    }
}

/// POST /api/auth/login - Requester login-or-register
pub async fn login(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    login_as(handlers, req, Role::Requester).await
}

/// POST /api/auth/admin/login - Approver login-or-register
pub async fn admin_login(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    login_as(handlers, req, Role::Approver).await
}

/// POST /api/auth/signout - Stateless signout
///
/// Tokens are self-contained, so the server holds no session to tear
/// down; the client discards its token.
pub async fn signout() -> Response {
    (
        StatusCode::OK,
        Json(SignoutResponse {
            message: "Signed out".to_string(),
        }),
    )
        .into_response()
}

async fn login_as(handlers: AuthHandlers, req: LoginRequest, role: Role) -> Response {
    let cmd = LoginCommand {
        name: req.name,
        email: req.email,
        password: req.password,
        role,
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(result) => {
            let status = if result.created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            let response = LoginResponse {
                token: result.token,
                user: (&result.user).into(),
            };
            (status, Json(response)).into_response()
        }
        Err(e) => handle_auth_error(e),
    }
}

fn handle_auth_error(error: AuthError) -> Response {
    // Transient failures (hashing, signing, storage) are the caller's cue
    // to retry; everything else is a credential problem.
    let (status, code) = if error.is_transient() {
        tracing::error!("auth service failure: {}", error);
        (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
    } else if matches!(error, AuthError::RoleMismatch) {
        (StatusCode::FORBIDDEN, "FORBIDDEN")
    } else {
        (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
    };

    (status, Json(ErrorResponse::new(code, error.to_string()))).into_response()
}
