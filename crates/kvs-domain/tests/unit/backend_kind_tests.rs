//! Backend Kind Tests

use kvs_domain::value_objects::BackendKind;

#[test]
fn test_backend_kind_names() {
    assert_eq!(BackendKind::Memory.to_string(), "memory");
    assert_eq!(BackendKind::Expiring.as_str(), "expiring");
    assert_eq!(BackendKind::default(), BackendKind::Memory);
}

#[test]
fn test_only_memory_kinds_are_local() {
    assert!(BackendKind::Memory.is_local());
    assert!(BackendKind::Expiring.is_local());
    assert!(!BackendKind::Redis.is_local());
    assert!(!BackendKind::Memcached.is_local());
}

#[test]
fn test_backend_kind_serde() {
    let kind: BackendKind = serde_json::from_str("\"expiring\"").unwrap();
    assert_eq!(kind, BackendKind::Expiring);
    assert_eq!(
        serde_json::to_string(&BackendKind::Redis).unwrap(),
        "\"redis\""
    );
}

#[test]
fn test_expiration_support() {
    assert!(!BackendKind::Memory.supports_expiration());
    assert!(BackendKind::Expiring.supports_expiration());
    assert!(BackendKind::Redis.supports_expiration());
}
