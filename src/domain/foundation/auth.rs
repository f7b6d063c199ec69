//! Authentication types for the domain layer.
//!
//! An [`Actor`] is the already-verified caller of a service operation.
//! The token-validation collaborator (see `ports::TokenService`) populates
//! it; domain code trusts it and only evaluates role and ownership.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::UserId;

/// Role of an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Proposes sessions and manages their own records.
    Requester,
    /// Confirms, reschedules, and cancels sessions.
    Approver,
}

impl Role {
    /// Stable string form used in token claims and persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Requester => "USER",
            Role::Approver => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::Requester),
            "ADMIN" => Ok(Role::Approver),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Authenticated caller of a service operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique account identifier.
    pub id: UserId,

    /// Email address from the token claims.
    pub email: String,

    /// Verified role.
    pub role: Role,
}

impl Actor {
    /// Creates a new actor.
    pub fn new(id: UserId, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            role,
        }
    }

    /// Returns true if the actor holds the approver role.
    pub fn is_approver(&self) -> bool {
        self.role == Role::Approver
    }

    /// Returns true if the actor holds the requester role.
    pub fn is_requester(&self) -> bool {
        self.role == Role::Requester
    }
}

/// Errors from the credential collaborator.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// Email/password pair did not match a stored credential.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Account exists but under a different role than requested.
    #[error("Unauthorized role")]
    RoleMismatch,

    /// The credential service failed (hashing, signing, storage).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
