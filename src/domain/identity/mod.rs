//! Identity domain module.
//!
//! Users are keyed either by email (login flow) or by an opaque private
//! identifier (anonymous flow).

mod user;

pub use user::{IdentityKey, IdentityRequest, User};
