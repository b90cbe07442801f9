//! Persisted session record for the signed-in administrator.
//!
//! A `SessionRecord` exists in storage exactly while a login is in effect: it
//! is written by a successful login, read on every guard evaluation, and
//! removed on logout or when the token is found invalid. It is never patched
//! in place; a fresh login replaces it wholesale.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Authorization class carried by the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[serde(alias = "admin")]
    Admin,
    #[default]
    #[serde(alias = "user")]
    User,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }
}

/// Proof of a completed login: bearer token plus minimal profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Opaque bearer credential.
    pub access_token: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SessionRecord {
    #[must_use]
    pub fn new(access_token: impl Into<String>, role: Role) -> Self {
        Self { access_token: access_token.into(), role, name: None, email: None }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name to show in the UI, falling back to email, then a placeholder.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or("admin")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("session storage failed: {0}")]
    Storage(String),
}
