//! LoginHandler - registers an email identity if it is not known yet.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::identity::IdentityKey;
use crate::ports::{EnsuredUser, UserRepository};

/// Command to log in with an email address.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
}

/// Handler for the login flow.
pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
}

impl LoginHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Idempotent: repeated logins with the same email resolve to one identity.
    pub async fn handle(&self, cmd: LoginCommand) -> Result<EnsuredUser, DomainError> {
        let key = IdentityKey::email(cmd.email)?;
        let ensured = self.users.ensure(&key).await?;

        if ensured.created {
            tracing::info!(user_id = %ensured.user.id, "User registered");
        } else {
            tracing::debug!(user_id = %ensured.user.id, "User already registered");
        }

        Ok(ensured)
    }
}
