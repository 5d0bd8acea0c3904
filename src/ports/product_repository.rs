//! Product record repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::product::ProductRecord;

/// Repository port for extracted product records.
///
/// Records accumulate per user; deduplication is left to readers.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, record: &ProductRecord) -> Result<(), DomainError>;

    /// All records for a user in creation order.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ProductRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ProductRepository) {}
    }
}
