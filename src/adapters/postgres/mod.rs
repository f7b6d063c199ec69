//! PostgreSQL adapters - sqlx implementations of the store ports.

mod session_store;
mod user_store;

pub use session_store::PostgresSessionStore;
pub use user_store::PostgresUserStore;
