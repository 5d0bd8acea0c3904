//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` - Identities with race-free creation
//! - `PostgresConversationRepository` - Append-only turn log
//! - `PostgresProductRepository` - Extracted product records

mod conversation_repository;
mod product_repository;
mod user_repository;

pub use conversation_repository::PostgresConversationRepository;
pub use product_repository::PostgresProductRepository;
pub use user_repository::PostgresUserRepository;

use sqlx::PgPool;

use crate::domain::foundation::DomainError;

/// Applies the bundled schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to run migrations: {}", e)))
}
