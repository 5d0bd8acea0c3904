//! Conversation domain module.
//!
//! An append-only log of turns per user, replayed as a transcript when
//! composing the next prompt.

mod transcript;
mod turn;

pub use transcript::Transcript;
pub use turn::{ConversationTurn, TurnContent, TurnOwner};
