//! Credential collaborator ports.
//!
//! Token issuance/validation and password hashing are external concerns:
//! the core only consumes the resulting [`Actor`]. Keeping them behind
//! ports means the HTTP middleware and login handler never name a concrete
//! JWT or hashing library.

use async_trait::async_trait;

use crate::domain::foundation::{Actor, AuthError};
use crate::domain::user::User;

/// Issues and validates access tokens.
#[async_trait]
pub trait TokenService: Send + Sync {
    /// Issues a token for an account.
    fn issue(&self, user: &User) -> Result<String, AuthError>;

    /// Validates a token and reconstructs the verified actor.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` for malformed tokens or bad signatures
    /// - `TokenExpired` when past the expiry claim
    async fn validate(&self, token: &str) -> Result<Actor, AuthError>;
}

/// Hashes and verifies passwords.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password for storage.
    fn hash(&self, plaintext: &str) -> Result<String, AuthError>;

    /// Verifies a plaintext password against a stored hash.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_service_is_object_safe() {
        fn _accepts_dyn(_svc: &dyn TokenService) {}
    }

    #[test]
    fn password_hasher_is_object_safe() {
        fn _accepts_dyn(_hasher: &dyn PasswordHasher) {}
    }
}
