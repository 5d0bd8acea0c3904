//! In-memory product record repository.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::product::ProductRecord;
use crate::ports::ProductRepository;

/// In-memory storage for product records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    records: Arc<RwLock<Vec<ProductRecord>>>,
    fail_saves: Arc<AtomicBool>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `save` fail with a database error.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Get the total number of stored records
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, record: &ProductRecord) -> Result<(), DomainError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::database("product store unavailable"));
        }
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ProductRecord>, DomainError> {
        let records = self.records.read().await;
        let mut own: Vec<_> = records
            .iter()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect();
        own.sort_by_key(|r| r.created_at);
        Ok(own)
    }
}
