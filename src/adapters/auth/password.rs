//! Bcrypt implementation of the `PasswordHasher` port.

use crate::domain::foundation::AuthError;
use crate::ports::PasswordHasher;

/// Hashes passwords with bcrypt.
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Overrides the work factor. Tests use a low cost.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| AuthError::service_unavailable(e.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AuthError> {
        bcrypt::verify(plaintext, hash)
            .map_err(|e| AuthError::service_unavailable(e.to_string()))
    }
}
