//! PostgreSQL implementation of `UserStore`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, Role, Timestamp, UserId};
use crate::domain::user::User;
use crate::ports::UserStore;

/// PostgreSQL implementation of [`UserStore`].
#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn insert(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.name())
        .bind(user.email())
        .bind(user.password_hash())
        .bind(user.role().as_str())
        .bind(user.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert user: {}", e)))?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            "SELECT id, name, email, password_hash, role, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch user: {}", e)))?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            "SELECT id, name, email, password_hash, role, created_at FROM users WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch user: {}", e)))?;

        row.map(row_to_user).transpose()
    }
}

fn row_to_user(row: PgRow) -> Result<User, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(e.to_string()))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database(e.to_string()))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| DomainError::database(e.to_string()))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| DomainError::database(e.to_string()))?;
    let role: String = row
        .try_get("role")
        .map_err(|e| DomainError::database(e.to_string()))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(e.to_string()))?;

    let role: Role = role.parse().map_err(|e: String| DomainError::database(e))?;

    Ok(User::reconstitute(
        UserId::from_uuid(id),
        name,
        email,
        password_hash,
        role,
        Timestamp::from_datetime(created_at),
    ))
}
