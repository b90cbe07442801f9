//! Backend-confirmed session checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only trust boundary on the client: local token inspection can
//! be fooled by a forged payload, the server cannot. Both checks are read-only
//! on the server, so guards may repeat them on every navigation.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (no session, transport error, timeout, non-2xx status,
//! undecodable body, missing flag) collapses to `false`. Nothing is raised
//! past this module.

#[cfg(test)]
#[path = "verifier_test.rs"]
mod verifier_test;

use super::api::{AUTHORIZE_PATH, AuthTransport, HttpResponse, VERIFY_PATH};
use super::types::{AuthorizeData, VerifyData, VerifyRequest};
use crate::config::{AdminConfig, GuardPolicy};
use crate::util::session_store::SessionStore;
use crate::util::storage::KeyValueStorage;

#[derive(Clone, Debug)]
pub struct RemoteVerifier<T, S> {
    transport: T,
    store: SessionStore<S>,
    verify_url: String,
    authorize_url: String,
}

impl<T: AuthTransport, S: KeyValueStorage> RemoteVerifier<T, S> {
    pub fn new(transport: T, store: SessionStore<S>, config: &AdminConfig) -> Self {
        Self {
            transport,
            store,
            verify_url: config.endpoint(VERIFY_PATH),
            authorize_url: config.endpoint(AUTHORIZE_PATH),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Ask the backend whether the stored token is valid.
    pub async fn verify_token(&self) -> bool {
        let Some(token) = self.bearer() else {
            log::debug!("verify skipped: no session");
            return false;
        };
        let body = match serde_json::to_value(VerifyRequest { token: &token }) {
            Ok(body) => body,
            Err(e) => {
                log::debug!("verify request encoding failed: {e}");
                return false;
            }
        };
        match self.transport.post_json(&self.verify_url, Some(&token), &body).await {
            Ok(resp) => flag(&resp, "verify", |data: VerifyData| data.valid),
            Err(e) => {
                log::debug!("verify failed: {e}");
                false
            }
        }
    }

    /// Ask the backend whether the stored credential is authorized.
    pub async fn check_authorization(&self) -> bool {
        let Some(token) = self.bearer() else {
            log::debug!("authorize skipped: no bearer credential");
            return false;
        };
        let body = serde_json::json!({});
        match self.transport.post_json(&self.authorize_url, Some(&token), &body).await {
            Ok(resp) => flag(&resp, "authorize", |data: AuthorizeData| data.authorized),
            Err(e) => {
                log::debug!("authorize failed: {e}");
                false
            }
        }
    }

    /// Run the remote checks enabled in `policy`. Disabled checks pass.
    pub async fn confirm(&self, policy: GuardPolicy) -> bool {
        if policy.verify_remote && !self.verify_token().await {
            return false;
        }
        if policy.require_authorization && !self.check_authorization().await {
            return false;
        }
        true
    }

    fn bearer(&self) -> Option<String> {
        self.store
            .load()
            .map(|session| session.access_token)
            .filter(|token| !token.is_empty())
    }
}

fn flag<D, F>(resp: &HttpResponse, check: &str, read: F) -> bool
where
    D: serde::de::DeserializeOwned,
    F: FnOnce(D) -> bool,
{
    if !resp.is_success() {
        log::warn!("{check} returned status {}", resp.status);
        return false;
    }
    match resp.envelope::<D>() {
        Ok(data) => read(data),
        Err(e) => {
            log::debug!("{check} response rejected: {e}");
            false
        }
    }
}
