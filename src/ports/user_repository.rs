//! User repository port.
//!
//! Identities are looked up by one unique key (email or private
//! identifier) and created on first sight of that key.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::identity::{IdentityKey, User};

/// Result of an idempotent create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsuredUser {
    pub user: User,
    /// True if this call inserted the identity.
    pub created: bool,
}

/// Repository port for user identities.
///
/// Implementations must keep email and private identifier unique, and
/// `ensure` must not create duplicates when called concurrently with the
/// same key.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the identity holding `key`.
    ///
    /// Returns `None` if no identity holds it.
    async fn find_by_key(&self, key: &IdentityKey) -> Result<Option<User>, DomainError>;

    /// Return the identity holding `key`, creating it if absent.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn ensure(&self, key: &IdentityKey) -> Result<EnsuredUser, DomainError>;
}
