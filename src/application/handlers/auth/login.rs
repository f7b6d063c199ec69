//! LoginHandler - role-scoped login-or-register.
//!
//! An unknown email registers a fresh account under the requested role; a
//! known email must match both the stored role and password. Either path
//! ends with an issued access token.

use std::sync::Arc;

use crate::domain::foundation::{AuthError, Role, UserId};
use crate::domain::user::User;
use crate::ports::{PasswordHasher, TokenService, UserStore};

/// Command to log in (or register) under a role.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful login outcome.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub token: String,
    /// True when a new account was registered by this call.
    pub created: bool,
}

/// Handler for login-or-register.
pub struct LoginHandler {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AuthError> {
        let existing = self
            .users
            .find_by_email(&cmd.email)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        match existing {
            Some(user) => {
                if user.role() != cmd.role {
                    tracing::warn!(email = %cmd.email, "login with mismatched role");
                    return Err(AuthError::RoleMismatch);
                }
                if !self.hasher.verify(&cmd.password, user.password_hash())? {
                    return Err(AuthError::InvalidCredentials);
                }
                let token = self.tokens.issue(&user)?;
                Ok(LoginResult {
                    user,
                    token,
                    created: false,
                })
            }
            None => {
                let hash = self.hasher.hash(&cmd.password)?;
                let user =
                    User::register(UserId::new(), cmd.name, cmd.email, hash, cmd.role)
                        .map_err(|e| AuthError::service_unavailable(e.to_string()))?;
                self.users
                    .insert(&user)
                    .await
                    .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

                tracing::info!(user = %user.id(), role = %user.role(), "account registered");
                let token = self.tokens.issue(&user)?;
                Ok(LoginResult {
                    user,
                    token,
                    created: true,
                })
            }
        }
    }
}
