//! Credential adapters - JWT tokens and bcrypt password hashing.

mod jwt;
mod password;

pub use jwt::JwtTokenService;
pub use password::BcryptPasswordHasher;
