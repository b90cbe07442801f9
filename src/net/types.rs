//! Wire DTOs for the admin REST API.
//!
//! DESIGN
//! ======
//! Every response from the cinema API is wrapped in a `{ "data": ... }`
//! envelope. Decoding is strict: a field with the wrong type fails the whole
//! decode, and callers treat that as a negative answer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::{Role, SessionRecord};

/// `{ "data": T }` response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Body of `POST /authenticate/verify`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VerifyRequest<'a> {
    pub token: &'a str,
}

/// Payload of a verify response. A missing `valid` field means "not valid".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct VerifyData {
    #[serde(default)]
    pub valid: bool,
}

/// Payload of an authorize response. A missing `authorized` field means "no".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthorizeData {
    #[serde(default)]
    pub authorized: bool,
}

/// Body of `POST /authenticate/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Payload of a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub access_token: String,
    pub role: Role,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<LoginData> for SessionRecord {
    fn from(data: LoginData) -> Self {
        Self { access_token: data.access_token, role: data.role, name: data.name, email: data.email }
    }
}

/// A row of the user-management table, as returned by `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    /// Number of bookings made by the user, when the API includes it.
    #[serde(default)]
    pub bookings: Option<u32>,
}
