//! JWT implementation of the `TokenService` port.

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Actor, AuthError, Timestamp};
use crate::domain::user::User;
use crate::ports::TokenService;

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Account id.
    sub: String,
    /// Email address, echoed into the `Actor`.
    email: String,
    /// Role wire form ("USER" / "ADMIN").
    role: String,
    /// Expiry as Unix seconds.
    exp: i64,
}

/// Issues and validates HS256-signed access tokens.
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry_hours: i64,
}

impl JwtTokenService {
    /// Creates a token service with the given signing secret and token
    /// lifetime in hours.
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        }
    }
}

#[async_trait]
impl TokenService for JwtTokenService {
    fn issue(&self, user: &User) -> Result<String, AuthError> {
        let claims = Claims {
            sub: user.id().to_string(),
            email: user.email().to_string(),
            role: user.role().as_str().to_string(),
            exp: Timestamp::now()
                .add_minutes(self.expiry_hours * 60)
                .as_unix_secs(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::service_unavailable(e.to_string()))
    }

    async fn validate(&self, token: &str) -> Result<Actor, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            },
        )?;

        let id = data
            .claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidToken)?;
        let role = data
            .claims
            .role
            .parse()
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(Actor::new(id, data.claims.email, role))
    }
}
