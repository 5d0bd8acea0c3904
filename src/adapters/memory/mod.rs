//! In-memory adapters for the repository ports.
//!
//! Used by tests and for local runs without a database.

mod conversation_repository;
mod product_repository;
mod user_repository;

pub use conversation_repository::InMemoryConversationRepository;
pub use product_repository::InMemoryProductRepository;
pub use user_repository::InMemoryUserRepository;
