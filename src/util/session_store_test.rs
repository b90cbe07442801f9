use super::*;
use crate::state::session::Role;
use crate::util::storage::MemoryStorage;

fn store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::new())
}

fn record() -> SessionRecord {
    SessionRecord {
        access_token: "header.payload.sig".to_owned(),
        role: Role::Admin,
        name: Some("Dana".to_owned()),
        email: Some("dana@cinema.test".to_owned()),
    }
}

// =============================================================
// load
// =============================================================

#[test]
fn load_without_record_is_none() {
    assert_eq!(store().load(), None);
}

#[test]
fn load_after_save_returns_record() {
    let store = store();
    store.save(&record()).unwrap();
    assert_eq!(store.load(), Some(record()));
}

#[test]
fn load_ignores_non_json_contents() {
    let store = store();
    for garbage in ["", "not json", "{", "null", "42", "[]", "\"token\""] {
        store.storage().set_item(SESSION_KEY, garbage).unwrap();
        assert_eq!(store.load(), None, "contents: {garbage:?}");
    }
}

#[test]
fn load_ignores_json_with_wrong_shape() {
    let store = store();
    for raw in [
        r#"{"role":"ADMIN"}"#,
        r#"{"accessToken":7,"role":"ADMIN"}"#,
        r#"{"accessToken":"t","role":"SUPERUSER"}"#,
    ] {
        store.storage().set_item(SESSION_KEY, raw).unwrap();
        assert_eq!(store.load(), None, "contents: {raw}");
    }
}

// =============================================================
// save
// =============================================================

#[test]
fn save_overwrites_existing_record() {
    let store = store();
    store.save(&record()).unwrap();
    let replacement = SessionRecord::new("other.token.sig", Role::User);
    store.save(&replacement).unwrap();
    assert_eq!(store.load(), Some(replacement));
}

// =============================================================
// clear / remember me
// =============================================================

#[test]
fn clear_then_load_is_none() {
    let store = store();
    store.save(&record()).unwrap();
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn clear_removes_remember_me_flag() {
    let store = store();
    store.save(&record()).unwrap();
    store.set_remember_me(true).unwrap();
    assert!(store.remember_me());
    store.clear();
    assert!(!store.remember_me());
    assert!(store.storage().is_empty());
}

#[test]
fn clear_without_session_is_harmless() {
    let store = store();
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn remember_me_false_removes_flag() {
    let store = store();
    store.set_remember_me(true).unwrap();
    store.set_remember_me(false).unwrap();
    assert!(!store.remember_me());
}
