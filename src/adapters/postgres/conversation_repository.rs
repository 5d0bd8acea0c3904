//! PostgreSQL implementation of ConversationRepository.
//!
//! Each turn is one row in `messages`, its payload stored as JSONB in the
//! shape the conversation endpoint returns.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::domain::conversation::{ConversationTurn, TurnContent, Transcript};
use crate::domain::foundation::{DomainError, Timestamp, TurnId, UserId};
use crate::ports::ConversationRepository;

/// PostgreSQL implementation of ConversationRepository.
#[derive(Clone)]
pub struct PostgresConversationRepository {
    pool: PgPool,
}

impl PostgresConversationRepository {
    /// Creates a new PostgresConversationRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationRepository for PostgresConversationRepository {
    async fn append(&self, turns: &[ConversationTurn]) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::database(format!("Failed to start transaction: {}", e))
        })?;

        for turn in turns {
            let payload = serde_json::to_value(&turn.content).map_err(|e| {
                DomainError::database(format!("Failed to serialize turn: {}", e))
            })?;

            sqlx::query(
                r#"
                INSERT INTO messages (id, user_id, message, created_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(turn.id.as_uuid())
            .bind(turn.user_id.as_uuid())
            .bind(payload)
            .bind(turn.created_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to insert turn: {}", e)))?;
        }

        tx.commit().await.map_err(|e| {
            DomainError::database(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(())
    }

    async fn transcript(&self, user_id: &UserId) -> Result<Transcript, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, message, created_at
            FROM messages
            WHERE user_id = $1
            ORDER BY created_at ASC, seq ASC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch turns: {}", e)))?;

        let turns = rows
            .into_iter()
            .map(row_to_turn)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Transcript::from_turns(turns))
    }
}

fn row_to_turn(row: PgRow) -> Result<ConversationTurn, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
    let user_id: uuid::Uuid = row
        .try_get("user_id")
        .map_err(|e| DomainError::database(format!("Failed to get user_id: {}", e)))?;
    let message: serde_json::Value = row
        .try_get("message")
        .map_err(|e| DomainError::database(format!("Failed to get message: {}", e)))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?;

    let content: TurnContent = serde_json::from_value(message)
        .map_err(|e| DomainError::database(format!("Malformed stored turn {}: {}", id, e)))?;

    Ok(ConversationTurn {
        id: TurnId::from_uuid(id),
        user_id: UserId::from_uuid(user_id),
        content,
        created_at: Timestamp::from_datetime(created_at),
    })
}
