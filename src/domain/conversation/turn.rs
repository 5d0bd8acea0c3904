//! Conversation turns: one message from the human or the assistant.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, TurnId, UserId};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnOwner {
    Human,
    Ai,
}

impl TurnOwner {
    /// Speaker label used when rendering a transcript.
    pub fn label(&self) -> &'static str {
        match self {
            TurnOwner::Human => "Human",
            TurnOwner::Ai => "Ai",
        }
    }
}

/// The stored payload of a turn.
///
/// Serialized as `{"owner", "message", "lang", "noms"?}`; this is the exact
/// shape the conversation endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnContent {
    pub owner: TurnOwner,
    pub message: String,
    pub lang: String,
    /// Regulation codes cited in an assistant turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noms: Option<Vec<String>>,
}

/// One immutable, append-only entry in a user's conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub id: TurnId,
    pub user_id: UserId,
    pub content: TurnContent,
    pub created_at: Timestamp,
}

impl ConversationTurn {
    /// Creates a human turn.
    pub fn human(user_id: UserId, message: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            id: TurnId::new(),
            user_id,
            content: TurnContent {
                owner: TurnOwner::Human,
                message: message.into(),
                lang: lang.into(),
                noms: None,
            },
            created_at: Timestamp::now(),
        }
    }

    /// Creates an assistant turn carrying the regulation codes it cites.
    pub fn ai(
        user_id: UserId,
        message: impl Into<String>,
        lang: impl Into<String>,
        noms: Vec<String>,
    ) -> Self {
        Self {
            id: TurnId::new(),
            user_id,
            content: TurnContent {
                owner: TurnOwner::Ai,
                message: message.into(),
                lang: lang.into(),
                noms: Some(noms),
            },
            created_at: Timestamp::now(),
        }
    }

    /// Overrides the creation time.
    pub fn at(mut self, created_at: Timestamp) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn owner(&self) -> TurnOwner {
        self.content.owner
    }

    pub fn message(&self) -> &str {
        &self.content.message
    }
}
