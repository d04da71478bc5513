//! Concurrency tests for the in-memory backends

use kvs_providers::{
    ContainerRegistry, ExpiringStorageProvider, ManualClock, MemoryStorageProvider, Storage,
    StorageProvider,
};
use serde_json::json;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_puts_leave_one_winner() {
    for _ in 0..50 {
        let provider = MemoryStorageProvider::new(Arc::new(ContainerRegistry::new()));
        let storage = provider.get_storage("race").unwrap();
        let barrier = Arc::new(Barrier::new(2));

        let writers: Vec<_> = ["v1", "v2"]
            .into_iter()
            .map(|value| {
                let storage = Arc::clone(&storage);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    storage.put("k", json!(value)).unwrap();
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let value = storage.get("k").unwrap().unwrap();
        assert!(value == json!("v1") || value == json!("v2"));
    }
}

#[test]
fn test_concurrent_first_open_shares_container() {
    let registry = Arc::new(ContainerRegistry::new());
    let barrier = Arc::new(Barrier::new(8));

    let openers: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let provider = MemoryStorageProvider::new(registry);
                barrier.wait();
                let storage = provider.get_storage("shared").unwrap();
                storage.put(&format!("k{i}"), json!(i)).unwrap();
            })
        })
        .collect();
    for opener in openers {
        opener.join().unwrap();
    }

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("shared").unwrap().len(), 8);
}

#[test]
fn test_readers_and_writers_on_expiring_storage() {
    let clock = Arc::new(ManualClock::new(0));
    let provider =
        ExpiringStorageProvider::with_clock(Arc::new(ContainerRegistry::new()), clock.clone());
    let storage = provider.get_storage("busy").unwrap();

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let storage = Arc::clone(&storage);
            let clock = Arc::clone(&clock);
            thread::spawn(move || {
                for i in 0..200 {
                    let key = format!("w{worker}-{}", i % 10);
                    storage.put_with_ttl(&key, json!(i), 1).unwrap();
                    storage.get(&key).unwrap();
                    storage.key_set().unwrap();
                    if i % 50 == 0 {
                        clock.advance(1);
                    }
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    clock.advance(10);
    assert_eq!(storage.size().unwrap(), 0);
}
