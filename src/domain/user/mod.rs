//! User credential entity for the login collaborator.
//!
//! Not part of the booking core: the session service only sees the
//! [`Actor`](crate::domain::foundation::Actor) that token validation
//! produces from one of these records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Role, Timestamp, UserId, ValidationError};

/// Stored account with a hashed password and a fixed role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    password_hash: String,
    role: Role,
    created_at: Timestamp,
}

impl User {
    /// Creates a new account. The password must already be hashed.
    pub fn register(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @"));
        }
        Ok(Self {
            id,
            name,
            email,
            password_hash: password_hash.into(),
            role,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitutes an account from persistence.
    pub fn reconstitute(
        id: UserId,
        name: String,
        email: String,
        password_hash: String,
        role: Role,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            role,
            created_at,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_creates_account() {
        let user = User::register(
            UserId::new(),
            "Alice",
            "alice@example.com",
            "$2b$10$hash",
            Role::Requester,
        )
        .unwrap();

        assert_eq!(user.name(), "Alice");
        assert_eq!(user.role(), Role::Requester);
    }

    #[test]
    fn register_rejects_blank_name() {
        let result = User::register(
            UserId::new(),
            "  ",
            "alice@example.com",
            "$2b$10$hash",
            Role::Requester,
        );
        assert!(result.is_err());
    }

    #[test]
    fn register_rejects_malformed_email() {
        let result = User::register(
            UserId::new(),
            "Alice",
            "not-an-email",
            "$2b$10$hash",
            Role::Requester,
        );
        assert!(result.is_err());
    }
}
