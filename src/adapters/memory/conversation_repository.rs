//! In-memory conversation repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::{ConversationTurn, Transcript};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ConversationRepository;

/// In-memory append-only turn log. Insertion order breaks timestamp ties.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationRepository {
    turns: Arc<RwLock<Vec<ConversationTurn>>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of stored turns
    pub async fn count(&self) -> usize {
        self.turns.read().await.len()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn append(&self, turns: &[ConversationTurn]) -> Result<(), DomainError> {
        self.turns.write().await.extend_from_slice(turns);
        Ok(())
    }

    async fn transcript(&self, user_id: &UserId) -> Result<Transcript, DomainError> {
        let turns = self.turns.read().await;
        let own = turns
            .iter()
            .filter(|t| &t.user_id == user_id)
            .cloned()
            .collect();
        Ok(Transcript::from_turns(own))
    }
}
