//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assistant;
pub mod conversation;
pub mod identity;
pub mod product;

pub use assistant::{
    AskAgentCommand, AskAgentError, AskAgentErrorKind, AskAgentHandler, AskAgentResult,
    AssistantSettings, ChatSettings, UtilitySettings,
};
pub use conversation::{GetConversationHandler, GetConversationQuery};
pub use identity::{LoginCommand, LoginHandler};
pub use product::{ExportProductsHandler, ExportProductsQuery, ProductExport};
