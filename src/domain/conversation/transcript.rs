//! Ordered view over a user's conversation log.

use super::turn::{ConversationTurn, TurnContent};

/// A user's turns in ascending creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<ConversationTurn>,
}

impl Transcript {
    /// Builds a transcript, ordering turns by creation time.
    ///
    /// The sort is stable, so turns sharing a timestamp keep the order they
    /// were supplied in.
    pub fn from_turns(mut turns: Vec<ConversationTurn>) -> Self {
        turns.sort_by_key(|t| t.created_at);
        Self { turns }
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Stored payloads in order, as returned to API clients.
    pub fn contents(&self) -> Vec<TurnContent> {
        self.turns.iter().map(|t| t.content.clone()).collect()
    }

    /// Renders `Owner: message` lines joined by newlines.
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(|t| format!("{}: {}", t.owner().label(), t.message()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
