//! HTTP adapter for the assistant endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{AssistantApiError, AssistantAppState};
pub use routes::{app, assistant_router, assistant_routes, cors_layer};
