//! Expiry Sweeper Tests

use kvs_domain::ports::StorageProvider;
use kvs_infrastructure::storage::ExpirySweeper;
use kvs_providers::{ContainerRegistry, ExpiringStorageProvider, ManualClock};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn setup() -> (Arc<ContainerRegistry>, Arc<ManualClock>, ExpiringStorageProvider) {
    let registry = Arc::new(ContainerRegistry::new());
    let clock = Arc::new(ManualClock::new(0));
    let provider = ExpiringStorageProvider::with_clock(Arc::clone(&registry), clock.clone());
    (registry, clock, provider)
}

#[test]
fn test_sweep_once_purges_all_containers() {
    let (registry, clock, provider) = setup();
    let a = provider.get_storage("a").unwrap();
    let b = provider.get_storage("b").unwrap();
    a.put_with_ttl("x", json!(1), 1).unwrap();
    b.put_with_ttl("y", json!(2), 1).unwrap();
    b.put("z", json!(3)).unwrap();
    clock.advance(2);

    let sweeper = ExpirySweeper::new(Arc::clone(&registry), clock.clone(), Duration::from_secs(1));

    assert_eq!(sweeper.sweep_once(), 2);
    assert_eq!(registry.get("a").unwrap().len(), 0);
    assert_eq!(registry.get("b").unwrap().len(), 1);
    assert_eq!(sweeper.sweep_once(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_spawned_sweeper_evicts_unread_entries() {
    let (registry, clock, provider) = setup();
    let storage = provider.get_storage("idle").unwrap();
    storage.put_with_ttl("k", json!(1), 1).unwrap();
    clock.advance(5);

    let token = CancellationToken::new();
    let handle = ExpirySweeper::new(Arc::clone(&registry), clock.clone(), Duration::from_secs(10))
        .spawn(token.clone());

    tokio::time::sleep(Duration::from_secs(11)).await;
    assert_eq!(registry.get("idle").unwrap().len(), 0);

    token.cancel();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_cancelled_sweeper_stops() {
    let (registry, clock, _provider) = setup();
    let token = CancellationToken::new();
    let handle =
        ExpirySweeper::new(registry, clock, Duration::from_secs(3600)).spawn(token.clone());

    token.cancel();

    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("sweeper did not stop")
        .unwrap();
}
