//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::identity::{IdentityKey, User};
use crate::ports::{EnsuredUser, UserRepository};

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn select_query(key: &IdentityKey) -> &'static str {
    match key {
        IdentityKey::Email(_) => {
            "SELECT id, google_id, email, private_id, created_at FROM users WHERE email = $1"
        }
        IdentityKey::PrivateId(_) => {
            "SELECT id, google_id, email, private_id, created_at FROM users WHERE private_id = $1"
        }
    }
}

fn insert_query(key: &IdentityKey) -> &'static str {
    match key {
        IdentityKey::Email(_) => {
            r#"
            INSERT INTO users (id, email, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, google_id, email, private_id, created_at
            "#
        }
        IdentityKey::PrivateId(_) => {
            r#"
            INSERT INTO users (id, private_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (private_id) DO NOTHING
            RETURNING id, google_id, email, private_id, created_at
            "#
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_key(&self, key: &IdentityKey) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(select_query(key))
            .bind(key.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch user: {}", e)))?;

        row.map(row_to_user).transpose()
    }

    async fn ensure(&self, key: &IdentityKey) -> Result<EnsuredUser, DomainError> {
        let inserted = sqlx::query(insert_query(key))
            .bind(UserId::new().as_uuid())
            .bind(key.value())
            .bind(Timestamp::now().as_datetime())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to insert user: {}", e)))?;

        if let Some(row) = inserted {
            return Ok(EnsuredUser {
                user: row_to_user(row)?,
                created: true,
            });
        }

        // Lost the race or already present.
        let user = self.find_by_key(key).await?.ok_or_else(|| {
            DomainError::database(format!(
                "User for key '{}' vanished after conflicting insert",
                key.value()
            ))
        })?;

        Ok(EnsuredUser {
            user,
            created: false,
        })
    }
}

fn row_to_user(row: PgRow) -> Result<User, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
    let google_id: Option<String> = row
        .try_get("google_id")
        .map_err(|e| DomainError::database(format!("Failed to get google_id: {}", e)))?;
    let email: Option<String> = row
        .try_get("email")
        .map_err(|e| DomainError::database(format!("Failed to get email: {}", e)))?;
    let private_id: Option<String> = row
        .try_get("private_id")
        .map_err(|e| DomainError::database(format!("Failed to get private_id: {}", e)))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?;

    Ok(User {
        id: UserId::from_uuid(id),
        google_id,
        email,
        private_id,
        created_at: Timestamp::from_datetime(created_at),
    })
}
