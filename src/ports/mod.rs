//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Text-completion oracle
//! - `UserRepository` - Identity lookup and idempotent creation
//! - `ConversationRepository` - Append-only turn log
//! - `ProductRepository` - Extracted product records
//! - `SpreadsheetExporter` - Workbook rendering for exports

mod ai_provider;
mod conversation_repository;
mod product_repository;
mod spreadsheet_exporter;
mod user_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, RequestMetadata, TokenUsage,
};
pub use conversation_repository::ConversationRepository;
pub use product_repository::ProductRepository;
pub use spreadsheet_exporter::{ExportError, SpreadsheetExporter, XLSX_CONTENT_TYPE};
pub use user_repository::{EnsuredUser, UserRepository};
