//! Store Tests
//!
//! Tests verify:
//! - Basic lookup/upsert operations
//! - Key uniqueness under overwrite
//! - The distinct-key capacity ceiling

use kvsock::{KvError, Store};

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = Store::new(100);
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
    assert_eq!(store.capacity(), 100);
}

#[test]
fn test_upsert_and_lookup() {
    let mut store = Store::new(100);

    store.upsert("name".to_string(), "Rojalin".to_string()).unwrap();

    assert_eq!(store.lookup("name"), Some("Rojalin"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_lookup_missing_key() {
    let store = Store::new(100);
    assert_eq!(store.lookup("nonexistent"), None);
}

#[test]
fn test_lookup_is_exact_match() {
    let mut store = Store::new(100);

    store.upsert("name".to_string(), "value".to_string()).unwrap();

    assert_eq!(store.lookup("nam"), None);
    assert_eq!(store.lookup("names"), None);
    assert_eq!(store.lookup("NAME"), None);
}

#[test]
fn test_empty_value_is_storable() {
    let mut store = Store::new(100);

    store.upsert("key".to_string(), String::new()).unwrap();

    assert_eq!(store.lookup("key"), Some(""));
}

// =============================================================================
// Uniqueness / Overwrite Tests
// =============================================================================

#[test]
fn test_overwrite_replaces_value_in_place() {
    let mut store = Store::new(100);

    store.upsert("key".to_string(), "v1".to_string()).unwrap();
    store.upsert("key".to_string(), "v2".to_string()).unwrap();

    assert_eq!(store.lookup("key"), Some("v2"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_set_sequence_keeps_one_entry_per_key() {
    let mut store = Store::new(100);

    for i in 0..10 {
        store.upsert("a".to_string(), format!("v{i}")).unwrap();
        store.upsert("b".to_string(), format!("w{i}")).unwrap();
    }

    assert_eq!(store.len(), 2);
    assert_eq!(store.lookup("a"), Some("v9"));
    assert_eq!(store.lookup("b"), Some("w9"));
}

// =============================================================================
// Capacity Ceiling Tests
// =============================================================================

#[test]
fn test_insert_beyond_capacity_fails() {
    let mut store = Store::new(3);

    store.upsert("k1".to_string(), "v1".to_string()).unwrap();
    store.upsert("k2".to_string(), "v2".to_string()).unwrap();
    store.upsert("k3".to_string(), "v3".to_string()).unwrap();

    let err = store.upsert("k4".to_string(), "v4".to_string()).unwrap_err();
    assert!(matches!(err, KvError::StoreFull));
}

#[test]
fn test_rejected_insert_leaves_store_unchanged() {
    let mut store = Store::new(2);

    store.upsert("k1".to_string(), "v1".to_string()).unwrap();
    store.upsert("k2".to_string(), "v2".to_string()).unwrap();
    store.upsert("k3".to_string(), "v3".to_string()).unwrap_err();

    assert_eq!(store.len(), 2);
    assert_eq!(store.lookup("k1"), Some("v1"));
    assert_eq!(store.lookup("k2"), Some("v2"));
    assert_eq!(store.lookup("k3"), None);
}

#[test]
fn test_overwrite_succeeds_at_capacity() {
    let mut store = Store::new(2);

    store.upsert("k1".to_string(), "v1".to_string()).unwrap();
    store.upsert("k2".to_string(), "v2".to_string()).unwrap();

    // Overwriting never counts against capacity
    store.upsert("k1".to_string(), "replaced".to_string()).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.lookup("k1"), Some("replaced"));
}

#[test]
fn test_fill_to_exact_capacity() {
    let mut store = Store::new(100);

    for i in 0..100 {
        store.upsert(format!("key{i}"), format!("value{i}")).unwrap();
    }

    assert_eq!(store.len(), 100);
    assert!(matches!(
        store.upsert("overflow".to_string(), "x".to_string()),
        Err(KvError::StoreFull)
    ));
    assert_eq!(store.lookup("key42"), Some("value42"));
}
