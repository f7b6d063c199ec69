//! User store port for the credential collaborator.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;

/// Store contract for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a new account.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (including duplicate email)
    async fn insert(&self, user: &User) -> Result<(), DomainError>;

    /// Looks up an account by email. Returns `None` if not found.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Looks up an account by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;
}
