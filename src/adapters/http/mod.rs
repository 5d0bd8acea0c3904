//! HTTP adapters - REST API implementations.

pub mod assistant;

pub use assistant::{app, assistant_router, AssistantAppState};
