//! Storage Provider Factory Tests

use kvs_domain::error::Error;
use kvs_domain::value_objects::BackendKind;
use kvs_infrastructure::config::StorageConfig;
use kvs_infrastructure::storage::StorageProviderFactory;
use kvs_providers::{ContainerRegistry, ManualClock};
use serde_json::json;
use std::sync::Arc;

fn factory(clock: Arc<ManualClock>) -> StorageProviderFactory {
    StorageProviderFactory::new(Arc::new(ContainerRegistry::new()), clock)
}

#[test]
fn test_creates_configured_backend() {
    let factory = factory(Arc::new(ManualClock::new(0)));

    let memory = factory.create_from_config(&StorageConfig::default()).unwrap();
    let expiring = factory.create(BackendKind::Expiring).unwrap();

    assert_eq!(memory.provider_name(), "memory");
    assert_eq!(expiring.provider_name(), "expiring");
}

#[test]
fn test_remote_backends_are_unavailable() {
    let factory = factory(Arc::new(ManualClock::new(0)));

    for kind in [BackendKind::Redis, BackendKind::Memcached] {
        match factory.create(kind) {
            Err(Error::BackendUnavailable { backend }) => assert_eq!(backend, kind.as_str()),
            other => panic!("Expected BackendUnavailable, got {other:?}"),
        }
    }
}

#[test]
fn test_swapping_backend_keeps_call_sites() {
    let clock = Arc::new(ManualClock::new(0));
    let factory = factory(clock.clone());

    for kind in [BackendKind::Memory, BackendKind::Expiring] {
        let provider = factory.create(kind).unwrap();
        let storage = provider.get_storage(&format!("routes-{kind}")).unwrap();

        storage.put_with_ttl("r", json!("/api"), 1).unwrap();
        clock.advance(5);

        let expected = if kind.supports_expiration() {
            None
        } else {
            Some(json!("/api"))
        };
        assert_eq!(storage.get("r").unwrap(), expected);
    }
}

#[test]
fn test_providers_from_one_factory_share_registry() {
    let factory = factory(Arc::new(ManualClock::new(0)));
    let first = factory.create(BackendKind::Memory).unwrap();
    let second = factory.create(BackendKind::Memory).unwrap();

    first.get_storage("shared").unwrap().put("k", json!(1)).unwrap();

    assert_eq!(
        second.get_storage("shared").unwrap().get("k").unwrap(),
        Some(json!(1))
    );
    assert!(factory.registry().contains("shared"));
}
