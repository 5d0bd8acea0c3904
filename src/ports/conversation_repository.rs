//! Conversation repository port.
//!
//! An append-only turn log per user.

use async_trait::async_trait;

use crate::domain::conversation::{ConversationTurn, Transcript};
use crate::domain::foundation::{DomainError, UserId};

/// Repository port for conversation turns.
///
/// Implementations must ensure:
/// - Turns are never updated or deleted
/// - All turns passed to one `append` call are stored atomically
/// - `transcript` orders turns by creation time, ties broken by
///   insertion order
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Append turns in order, all or nothing.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn append(&self, turns: &[ConversationTurn]) -> Result<(), DomainError>;

    /// All turns for a user in ascending order. Empty if none.
    async fn transcript(&self, user_id: &UserId) -> Result<Transcript, DomainError>;
}
