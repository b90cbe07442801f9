use super::*;
use crate::net::api::TransportError;
use crate::net::testing::ScriptedTransport;
use crate::state::session::{Role, SessionRecord};
use crate::util::storage::MemoryStorage;
use futures::executor::block_on;

const TOKEN: &str = "h.p.s";

fn signed_in_store() -> SessionStore<MemoryStorage> {
    let store = SessionStore::new(MemoryStorage::new());
    store.save(&SessionRecord::new(TOKEN, Role::Admin)).unwrap();
    store
}

fn verifier(transport: ScriptedTransport, store: SessionStore<MemoryStorage>) -> RemoteVerifier<ScriptedTransport, MemoryStorage> {
    let config = AdminConfig { api_base: "https://api.cinema.test".to_owned(), ..AdminConfig::default() };
    RemoteVerifier::new(transport, store, &config)
}

// =============================================================
// verify_token
// =============================================================

#[test]
fn verify_token_true_when_backend_marks_valid() {
    let v = verifier(ScriptedTransport::new().reply(200, r#"{"data":{"valid":true}}"#), signed_in_store());
    assert!(block_on(v.verify_token()));

    let requests = v.transport().requests();
    assert_eq!(requests[0].url, "https://api.cinema.test/authenticate/verify");
    assert_eq!(requests[0].bearer.as_deref(), Some(TOKEN));
    assert_eq!(requests[0].body, Some(serde_json::json!({ "token": TOKEN })));
}

#[test]
fn verify_token_false_without_session() {
    let store = SessionStore::new(MemoryStorage::new());
    let v = verifier(ScriptedTransport::new().reply(200, r#"{"data":{"valid":true}}"#), store);
    assert!(!block_on(v.verify_token()));
    assert!(v.transport().requests().is_empty());
}

#[test]
fn verify_token_false_on_network_failure() {
    let v = verifier(
        ScriptedTransport::new().fail(TransportError::Network("connection reset".to_owned())),
        signed_in_store(),
    );
    assert!(!block_on(v.verify_token()));
}

#[test]
fn verify_token_false_on_timeout() {
    let v = verifier(ScriptedTransport::new().fail(TransportError::Timeout { millis: 5_000 }), signed_in_store());
    assert!(!block_on(v.verify_token()));
}

#[test]
fn verify_token_false_on_error_status_even_with_valid_body() {
    let v = verifier(ScriptedTransport::new().reply(500, r#"{"data":{"valid":true}}"#), signed_in_store());
    assert!(!block_on(v.verify_token()));
}

#[test]
fn verify_token_false_unless_explicitly_valid() {
    for body in [r#"{"data":{"valid":false}}"#, r#"{"data":{}}"#, r#"{"valid":true}"#, "", "<html>"] {
        let v = verifier(ScriptedTransport::new().reply(200, body), signed_in_store());
        assert!(!block_on(v.verify_token()), "body: {body:?}");
    }
}

#[test]
fn verify_token_is_repeatable() {
    let transport = ScriptedTransport::new()
        .reply(200, r#"{"data":{"valid":true}}"#)
        .reply(200, r#"{"data":{"valid":true}}"#);
    let v = verifier(transport, signed_in_store());
    assert!(block_on(v.verify_token()));
    assert!(block_on(v.verify_token()));
}

// =============================================================
// check_authorization
// =============================================================

#[test]
fn check_authorization_true_when_authorized() {
    let v = verifier(ScriptedTransport::new().reply(200, r#"{"data":{"authorized":true}}"#), signed_in_store());
    assert!(block_on(v.check_authorization()));
    let requests = v.transport().requests();
    assert_eq!(requests[0].url, "https://api.cinema.test/authenticate/authorize");
    assert_eq!(requests[0].body, Some(serde_json::json!({})));
}

#[test]
fn check_authorization_false_without_bearer() {
    let store = SessionStore::new(MemoryStorage::new());
    store.save(&SessionRecord::new("", Role::Admin)).unwrap();
    let v = verifier(ScriptedTransport::new().reply(200, r#"{"data":{"authorized":true}}"#), store);
    assert!(!block_on(v.check_authorization()));
    assert!(v.transport().requests().is_empty());
}

#[test]
fn check_authorization_false_on_forbidden() {
    let v = verifier(ScriptedTransport::new().reply(403, ""), signed_in_store());
    assert!(!block_on(v.check_authorization()));
}

// =============================================================
// confirm
// =============================================================

#[test]
fn confirm_with_no_remote_checks_passes_without_requests() {
    let v = verifier(ScriptedTransport::new(), signed_in_store());
    assert!(block_on(v.confirm(GuardPolicy::default())));
    assert!(v.transport().requests().is_empty());
}

#[test]
fn confirm_stops_after_failed_verification() {
    let policy = GuardPolicy { verify_remote: true, require_authorization: true, ..GuardPolicy::default() };
    let v = verifier(ScriptedTransport::new().reply(200, r#"{"data":{"valid":false}}"#), signed_in_store());
    assert!(!block_on(v.confirm(policy)));
    assert_eq!(v.transport().requests().len(), 1);
}

#[test]
fn confirm_runs_both_checks() {
    let policy = GuardPolicy { verify_remote: true, require_authorization: true, ..GuardPolicy::default() };
    let transport = ScriptedTransport::new()
        .reply(200, r#"{"data":{"valid":true}}"#)
        .reply(200, r#"{"data":{"authorized":false}}"#);
    let v = verifier(transport, signed_in_store());
    assert!(!block_on(v.confirm(policy)));
    assert_eq!(v.transport().requests().len(), 2);
}
