//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (login, assistant turn) are separated from queries
//! (conversation log, product export).

pub mod handlers;

pub use handlers::{
    AskAgentCommand, AskAgentError, AskAgentErrorKind, AskAgentHandler, AskAgentResult,
    AssistantSettings, ExportProductsHandler, ExportProductsQuery, GetConversationHandler,
    GetConversationQuery, LoginCommand, LoginHandler, ProductExport,
};
