//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Authentication configuration (token signing and password hashing)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for signing access tokens
    pub jwt_secret: String,

    /// Token lifetime in hours
    #[serde(default = "default_token_expiry_hours")]
    pub token_expiry_hours: i64,

    /// Bcrypt work factor for password hashes
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_JWT_SECRET"));
        }
        if *environment == Environment::Production && self.jwt_secret.len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }
        if self.token_expiry_hours < 1 || self.token_expiry_hours > 720 {
            return Err(ValidationError::InvalidTokenExpiry);
        }
        if self.bcrypt_cost < 4 || self.bcrypt_cost > 16 {
            return Err(ValidationError::InvalidBcryptCost);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_expiry_hours: default_token_expiry_hours(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

fn default_token_expiry_hours() -> i64 {
    24
}

fn default_bcrypt_cost() -> u32 {
    12
}
