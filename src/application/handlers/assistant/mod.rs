//! Assistant command handlers.
//!
//! One assistant turn uses up to three oracle calls: language detection,
//! the chat completion, and product extraction when the reply is a
//! formatted answer.

mod ask_agent;
mod completion;
mod detect_language;
mod extract_product;
mod settings;

pub use ask_agent::{
    AskAgentCommand, AskAgentError, AskAgentErrorKind, AskAgentHandler, AskAgentResult,
};
pub use completion::CompletionEngine;
pub use detect_language::LanguageDetector;
pub use extract_product::{ExtractError, ProductExtractor};
pub use settings::{AssistantSettings, ChatSettings, UtilitySettings};
