//! User and session identifiers

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// The authenticated principal a chat record belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn try_new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidUser("user name cannot be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Conversation session identifier handed to intent-matching providers.
///
/// Sessions are scoped to one user (or one anonymous request) so intent
/// state never crosses users.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Session shared by all requests of one user.
    ///
    /// ASCII alphanumerics are kept and every other UTF-8 byte becomes
    /// `-xx`, so the id stays path-safe and two names never map to the
    /// same session.
    pub fn for_user(user: &UserId) -> Self {
        let mut id = String::from("user-");
        for byte in user.as_str().bytes() {
            if byte.is_ascii_alphanumeric() {
                id.push(char::from(byte));
            } else {
                let _ = write!(id, "-{:02x}", byte);
            }
        }
        Self(id)
    }

    /// Fresh session for a single anonymous request.
    pub fn ephemeral() -> Self {
        Self(format!("req-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
