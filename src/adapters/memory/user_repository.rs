//! In-memory user repository.
//!
//! Useful for tests and for running without a database.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::identity::{IdentityKey, User};
use crate::ports::{EnsuredUser, UserRepository};

/// In-memory storage for identities.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored identities
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Inserts a user as-is (test setup).
    pub async fn insert(&self, user: User) {
        self.users.write().await.push(user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_key(&self, key: &IdentityKey) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.matches(key)).cloned())
    }

    async fn ensure(&self, key: &IdentityKey) -> Result<EnsuredUser, DomainError> {
        // The write lock spans lookup and insert so concurrent callers
        // cannot both create.
        let mut users = self.users.write().await;
        if let Some(user) = users.iter().find(|u| u.matches(key)) {
            return Ok(EnsuredUser {
                user: user.clone(),
                created: false,
            });
        }

        let user = match key {
            IdentityKey::Email(email) => User::with_email(email.clone()),
            IdentityKey::PrivateId(id) => User::with_private_id(id.clone()),
        };
        users.push(user.clone());
        Ok(EnsuredUser {
            user,
            created: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_creates_once() {
        let repo = InMemoryUserRepository::new();
        let key = IdentityKey::Email("a@example.com".into());

        let first = repo.ensure(&key).await.unwrap();
        let second = repo.ensure(&key).await.unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(first.user.id, second.user.id);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn concurrent_ensure_does_not_duplicate() {
        let repo = InMemoryUserRepository::new();
        let key = IdentityKey::PrivateId("device-1".into());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                let key = key.clone();
                tokio::spawn(async move { repo.ensure(&key).await.unwrap() })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().created {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn find_distinguishes_key_kinds() {
        let repo = InMemoryUserRepository::new();
        repo.insert(User::with_private_id("shared")).await;

        assert!(repo
            .find_by_key(&IdentityKey::PrivateId("shared".into()))
            .await
            .unwrap()
            .is_some());
        assert!(repo
            .find_by_key(&IdentityKey::Email("shared".into()))
            .await
            .unwrap()
            .is_none());
    }
}
