//! GetConversationHandler - Query handler for a user's conversation log.

use std::sync::Arc;

use crate::domain::conversation::Transcript;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::identity::IdentityKey;
use crate::ports::{ConversationRepository, UserRepository};

/// Query to get a user's conversation.
#[derive(Debug, Clone)]
pub struct GetConversationQuery {
    pub user_email: String,
}

/// Handler for getting conversations.
pub struct GetConversationHandler {
    users: Arc<dyn UserRepository>,
    conversations: Arc<dyn ConversationRepository>,
}

impl GetConversationHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        conversations: Arc<dyn ConversationRepository>,
    ) -> Self {
        Self {
            users,
            conversations,
        }
    }

    /// Returns the user's turns oldest first. An unknown email is not found;
    /// a known user without turns gets an empty transcript.
    pub async fn handle(&self, query: GetConversationQuery) -> Result<Transcript, DomainError> {
        let key = IdentityKey::Email(query.user_email);
        let user = match self.users.find_by_key(&key).await? {
            Some(user) => user,
            None => {
                return Err(DomainError::new(
                    ErrorCode::UserNotFound,
                    "No conversation found for this user",
                ))
            }
        };

        self.conversations.transcript(&user.id).await
    }
}
