//! Tests for the expiring backend

use kvs_providers::{
    ContainerRegistry, ExpiringStorage, ExpiringStorageProvider, ManualClock, Storage,
    StorageProvider,
};
use serde_json::json;
use std::sync::Arc;

fn open(clock: &Arc<ManualClock>) -> ExpiringStorage {
    let storage = ExpiringStorage::with_clock(
        Arc::new(ContainerRegistry::new()),
        "cache",
        clock.clone(),
    );
    storage.initialize().unwrap();
    storage
}

#[test]
fn test_session_expiry_scenario() {
    let clock = Arc::new(ManualClock::new(1_700_000_000));
    let provider = ExpiringStorageProvider::with_clock(
        Arc::new(ContainerRegistry::new()),
        clock.clone(),
    );
    let sessions = provider.get_storage("sessions").unwrap();

    sessions
        .put_with_ttl("u1", json!({"name": "bob"}), 2)
        .unwrap();
    assert_eq!(sessions.get("u1").unwrap(), Some(json!({"name": "bob"})));

    clock.advance(3);

    assert_eq!(sessions.get("u1").unwrap(), None);
    assert_eq!(sessions.size().unwrap(), 0);
}

#[test]
fn test_value_visible_until_ttl_plus_one() {
    for ttl in [1_i64, 2, 7, 60] {
        let clock = Arc::new(ManualClock::new(0));
        let storage = open(&clock);
        storage.put_with_ttl("k", json!(ttl), ttl).unwrap();

        for t in 0..=ttl {
            clock.set(t);
            assert_eq!(storage.get("k").unwrap(), Some(json!(ttl)), "ttl={ttl} t={t}");
        }

        clock.set(ttl + 1);
        assert_eq!(storage.get("k").unwrap(), None, "ttl={ttl}");
        assert!(!storage.key_set().unwrap().contains("k"));
    }
}

#[test]
fn test_plain_put_never_expires() {
    let clock = Arc::new(ManualClock::new(0));
    let storage = open(&clock);
    storage.put("k", json!("v")).unwrap();

    clock.advance(i64::from(u32::MAX));

    assert_eq!(storage.get("k").unwrap(), Some(json!("v")));
}

#[test]
fn test_membership_routes_through_validity() {
    let clock = Arc::new(ManualClock::new(0));
    let storage = open(&clock);
    storage.put_with_ttl("gone", json!("old"), 1).unwrap();
    storage.put("kept", json!("new")).unwrap();
    clock.advance(2);

    assert!(!storage.contains_key("gone").unwrap());
    assert!(!storage.contains_value(&json!("old")).unwrap());
    assert!(storage.contains_key("kept").unwrap());
    assert_eq!(storage.values().unwrap(), vec![json!("new")]);
}

#[test]
fn test_get_all_reports_expired_as_missing() {
    let clock = Arc::new(ManualClock::new(0));
    let storage = open(&clock);
    storage.put_with_ttl("a", json!(1), 1).unwrap();
    storage.put("b", json!(2)).unwrap();
    clock.advance(5);

    let found = storage.get_all(&["a", "b"]).unwrap();

    assert_eq!(found["a"], None);
    assert_eq!(found["b"], Some(json!(2)));
}

#[test]
fn test_put_remove_get() {
    let clock = Arc::new(ManualClock::new(0));
    let storage = open(&clock);

    storage.put_with_ttl("k", json!(1), 30).unwrap();
    assert_eq!(storage.remove("k").unwrap(), json!(1));
    assert_eq!(storage.get("k").unwrap(), None);
}

#[test]
fn test_clear_removes_everything() {
    let clock = Arc::new(ManualClock::new(0));
    let storage = open(&clock);
    storage.put_with_ttl("a", json!(1), 1).unwrap();
    storage.put("b", json!(2)).unwrap();
    clock.advance(3);

    storage.clear().unwrap();

    assert!(storage.is_empty().unwrap());
}

#[test]
fn test_unread_expired_key_lingers_until_touched() {
    let clock = Arc::new(ManualClock::new(0));
    let registry = Arc::new(ContainerRegistry::new());
    let storage = ExpiringStorage::with_clock(Arc::clone(&registry), "lazy", clock.clone());
    storage.initialize().unwrap();
    storage.put_with_ttl("k", json!(1), 1).unwrap();
    clock.advance(10);

    let container = registry.get("lazy").unwrap();
    assert_eq!(container.len(), 1);

    assert_eq!(storage.size().unwrap(), 0);
    assert_eq!(container.len(), 0);
}
