//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `identity` - Users keyed by email or private identifier
//! - `conversation` - Append-only turn log and transcript rendering
//! - `assistant` - Prompt decoding, templates, composition, reply analysis
//! - `product` - Extracted product records and their literal parser

pub mod assistant;
pub mod conversation;
pub mod foundation;
pub mod identity;
pub mod product;
