//! User identity entity and the rules for resolving one per request.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// A user known to the assistant.
///
/// Identities come from two flows: the Google login flow (keyed by email)
/// and the anonymous device flow (keyed by an opaque private identifier).
/// Each key is unique when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub google_id: Option<String>,
    pub email: Option<String>,
    pub private_id: Option<String>,
    pub created_at: Timestamp,
}

impl User {
    /// Creates a new identity keyed by email.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            google_id: None,
            email: Some(email.into()),
            private_id: None,
            created_at: Timestamp::now(),
        }
    }

    /// Creates a new anonymous identity keyed by private identifier.
    pub fn with_private_id(private_id: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            google_id: None,
            email: None,
            private_id: Some(private_id.into()),
            created_at: Timestamp::now(),
        }
    }

    /// Returns true if the identity matches the given lookup key.
    pub fn matches(&self, key: &IdentityKey) -> bool {
        match key {
            IdentityKey::Email(email) => self.email.as_deref() == Some(email.as_str()),
            IdentityKey::PrivateId(id) => self.private_id.as_deref() == Some(id.as_str()),
        }
    }
}

/// The unique key an identity is looked up or created by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    Email(String),
    PrivateId(String),
}

impl IdentityKey {
    /// Builds an email key, rejecting blank input.
    pub fn email(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        Ok(Self::Email(email))
    }

    /// Returns the raw key value.
    pub fn value(&self) -> &str {
        match self {
            IdentityKey::Email(v) | IdentityKey::PrivateId(v) => v,
        }
    }
}

/// Identity hints carried by an assistant request.
///
/// An email, when given, is the lookup key; otherwise the private
/// identifier is. When the lookup misses, only a private identifier can
/// create a new identity; emails are created exclusively by the login flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityRequest {
    pub email: Option<String>,
    pub private_id: Option<String>,
}

impl IdentityRequest {
    /// Creates a request from optional email and private identifier.
    pub fn new(email: Option<String>, private_id: Option<String>) -> Self {
        Self {
            email: non_blank(email),
            private_id: non_blank(private_id),
        }
    }

    /// The key used to find an existing identity.
    pub fn lookup_key(&self) -> Option<IdentityKey> {
        match (&self.email, &self.private_id) {
            (Some(email), _) => Some(IdentityKey::Email(email.clone())),
            (None, Some(id)) => Some(IdentityKey::PrivateId(id.clone())),
            (None, None) => None,
        }
    }

    /// The key used to create an identity when the lookup misses.
    pub fn creation_key(&self) -> Option<IdentityKey> {
        self.private_id.clone().map(IdentityKey::PrivateId)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
