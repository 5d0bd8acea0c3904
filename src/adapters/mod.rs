//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - OpenAI chat completions and a scripted mock
//! - `export` - XLSX workbook rendering
//! - `http` - Axum REST surface
//! - `memory` - In-memory repositories
//! - `postgres` - PostgreSQL repositories

pub mod ai;
pub mod export;
pub mod http;
pub mod memory;
pub mod postgres;
