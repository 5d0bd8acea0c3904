//! Product domain module.
//!
//! Structured tax and regulatory records extracted from formatted
//! assistant answers, and the parser for the oracle's mapping literal.

pub mod literal;
mod record;

pub use literal::{parse_mapping, strip_code_fence, LiteralError, LiteralMap, LiteralValue};
pub use record::{field, ProductRecord, RecordError};
