//! REST API helpers for communicating with the cinema backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, bounded by the
//! configured timeout.
//! Server-side (SSR) and host builds: `HttpTransport` returns
//! `TransportError::Unavailable` since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. The guard-facing verifier
//! collapses every error to `false`; the login page shows them to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use futures::future::{Either, select};
use serde::de::DeserializeOwned;

use super::types::{ApiEnvelope, LoginData, LoginRequest, UserSummary};
use crate::config::AdminConfig;
use crate::state::session::SessionRecord;

pub const VERIFY_PATH: &str = "authenticate/verify";
pub const AUTHORIZE_PATH: &str = "authenticate/authorize";
pub const LOGIN_PATH: &str = "authenticate/login";
pub const USERS_PATH: &str = "users";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {millis}ms")]
    Timeout { millis: u32 },
    #[error("http transport unavailable outside the browser")]
    Unavailable,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("{0}")]
    Rejected(String),
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a `{ "data": T }` body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` when the body does not match the envelope.
    pub fn envelope<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str::<ApiEnvelope<T>>(&self.body)
            .map(|envelope| envelope.data)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// HTTP capability used by the verifier and page helpers.
///
/// `bearer` is attached as `Authorization: Bearer <token>` when present.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    async fn post_json(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError>;

    async fn get(&self, url: &str, bearer: Option<&str>) -> Result<HttpResponse, TransportError>;
}

/// `gloo-net` transport with a per-request timeout.
#[derive(Clone, Copy, Debug)]
pub struct HttpTransport {
    timeout_ms: u32,
}

impl HttpTransport {
    #[must_use]
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }

    #[must_use]
    pub fn from_config(config: &AdminConfig) -> Self {
        Self::new(config.verify_timeout_ms)
    }
}

impl AuthTransport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::post(url);
            if let Some(token) = bearer {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let request = builder.json(body).map_err(|e| TransportError::Network(e.to_string()))?;
            let exchange = async move {
                let resp = request.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                Ok::<_, TransportError>(HttpResponse { status, body })
            };
            with_deadline(exchange, gloo_timers::future::TimeoutFuture::new(self.timeout_ms), self.timeout_ms).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, bearer, body, self.timeout_ms);
            Err(TransportError::Unavailable)
        }
    }

    async fn get(&self, url: &str, bearer: Option<&str>) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::get(url);
            if let Some(token) = bearer {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let exchange = async move {
                let resp = builder.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                Ok::<_, TransportError>(HttpResponse { status, body })
            };
            with_deadline(exchange, gloo_timers::future::TimeoutFuture::new(self.timeout_ms), self.timeout_ms).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, bearer, self.timeout_ms);
            Err(TransportError::Unavailable)
        }
    }
}

/// Race `exchange` against `deadline`; the deadline winning is a timeout.
pub async fn with_deadline<F, D>(exchange: F, deadline: D, millis: u32) -> Result<HttpResponse, TransportError>
where
    F: Future<Output = Result<HttpResponse, TransportError>>,
    D: Future<Output = ()>,
{
    futures::pin_mut!(exchange, deadline);
    match select(exchange, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(TransportError::Timeout { millis }),
    }
}

#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn login_rejected_message(status: u16) -> String {
    match status {
        400 | 401 | 403 => "Invalid email or password.".to_owned(),
        _ => format!("login failed: {status}"),
    }
}

/// Exchange credentials for a session via `POST {api}/authenticate/login`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` for bad credentials, `ApiError::Status` for
/// other non-success statuses, and transport/decode errors as-is.
pub async fn login<T: AuthTransport>(
    transport: &T,
    config: &AdminConfig,
    email: &str,
    password: &str,
) -> Result<SessionRecord, ApiError> {
    let payload = serde_json::to_value(LoginRequest { email, password }).map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = transport.post_json(&config.endpoint(LOGIN_PATH), None, &payload).await?;
    if !resp.is_success() {
        log::warn!("login rejected with status {}", resp.status);
        return Err(ApiError::Rejected(login_rejected_message(resp.status)));
    }
    let data: LoginData = resp.envelope()?;
    if data.access_token.is_empty() {
        return Err(ApiError::Decode("empty access token".to_owned()));
    }
    Ok(data.into())
}

/// Fetch the user-management listing via `GET {api}/users`.
///
/// # Errors
///
/// Returns `ApiError::Status` for non-success statuses and transport/decode
/// errors as-is.
pub async fn fetch_users<T: AuthTransport>(
    transport: &T,
    config: &AdminConfig,
    session: &SessionRecord,
) -> Result<Vec<UserSummary>, ApiError> {
    let resp = transport.get(&config.endpoint(USERS_PATH), Some(&session.access_token)).await?;
    if !resp.is_success() {
        log::warn!("user listing failed with status {}", resp.status);
        return Err(ApiError::Status(resp.status));
    }
    resp.envelope()
}
