use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    assert_eq!(storage.get_item("missing"), None);
}

#[test]
fn memory_storage_set_overwrites() {
    let storage = MemoryStorage::new();
    storage.set_item("k", "one").unwrap();
    storage.set_item("k", "two").unwrap();
    assert_eq!(storage.get_item("k").as_deref(), Some("two"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_absent_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove_item("nothing");
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_clones_share_slots() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    storage.set_item("k", "v").unwrap();
    assert_eq!(other.get_item("k").as_deref(), Some("v"));
    other.remove_item("k");
    assert_eq!(storage.get_item("k"), None);
}

// =============================================================
// BrowserStorage (host build)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_off_browser() {
    let storage = BrowserStorage;
    assert!(storage.set_item("k", "v").is_err());
    assert_eq!(storage.get_item("k"), None);
    storage.remove_item("k");
}
