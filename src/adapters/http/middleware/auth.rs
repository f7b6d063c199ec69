//! Authentication middleware and extractor for axum.
//!
//! The middleware validates the bearer token through the `TokenService`
//! port and injects the verified [`Actor`] into request extensions;
//! handlers read it back with the [`RequireAuth`] extractor. Which token
//! implementation backs the port is invisible here.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{Actor, AuthError};
use crate::ports::TokenService;

/// Auth middleware state - the token validation port.
pub type AuthState = Arc<dyn TokenService>;

/// Validates the `Authorization: Bearer <token>` header.
///
/// On success the verified [`Actor`] lands in request extensions; on a
/// missing token the request continues unauthenticated (handlers enforce
/// via [`RequireAuth`]); on an invalid token the request is rejected.
pub async fn auth_middleware(
    State(tokens): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match tokens.validate(token).await {
            Ok(actor) => {
                request.extensions_mut().insert(actor);
                next.run(request).await
            }
            Err(e) => {
                let (status, message) = match &e {
                    AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
                    AuthError::ServiceUnavailable(msg) => {
                        tracing::error!("Token service unavailable: {}", msg);
                        (
                            StatusCode::SERVICE_UNAVAILABLE,
                            "Authentication service unavailable",
                        )
                    }
                    _ => (StatusCode::UNAUTHORIZED, "Invalid token"),
                };
                (
                    status,
                    Json(serde_json::json!({
                        "code": "AUTH_ERROR",
                        "message": message,
                    })),
                )
                    .into_response()
            }
        },
        None => next.run(request).await,
    }
}

/// Extractor that requires an authenticated actor.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub Actor);

#[async_trait::async_trait]
impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Actor>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "code": "AUTH_ERROR",
                "message": "Authentication required",
            })),
        )
            .into_response()
    }
}
