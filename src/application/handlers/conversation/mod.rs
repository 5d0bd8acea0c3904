//! Conversation query handlers.

mod get_conversation;

pub use get_conversation::{GetConversationHandler, GetConversationQuery};
