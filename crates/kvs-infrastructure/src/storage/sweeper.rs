//! Background expiry sweeper
//!
//! Expiration is lazy by default: an expired entry leaves memory only when
//! it is next read or enumerated. The sweeper is the opt-in complement that
//! periodically purges every registered container, bounding how long
//! unread expired entries stay resident.
//!
//! Disabled unless `storage.sweep_interval_secs` is non-zero.

use kvs_domain::ports::Clock;
use kvs_providers::ContainerRegistry;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodic purge of expired entries across a registry
#[derive(Debug, Clone)]
pub struct ExpirySweeper {
    registry: Arc<ContainerRegistry>,
    clock: Arc<dyn Clock>,
    interval: Duration,
}

impl ExpirySweeper {
    /// Create a sweeper running every `interval`
    pub fn new(registry: Arc<ContainerRegistry>, clock: Arc<dyn Clock>, interval: Duration) -> Self {
        Self {
            registry,
            clock,
            interval,
        }
    }

    /// Sweep interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Purge every container once
    ///
    /// Returns the total number of evicted entries.
    pub fn sweep_once(&self) -> usize {
        let now = self.clock.now_secs();
        let evicted: usize = self
            .registry
            .containers()
            .iter()
            .map(|(_, container)| container.purge_expired(now))
            .sum();
        if evicted > 0 {
            debug!(evicted, "Expiry sweep evicted entries");
        }
        evicted
    }

    /// Run the sweeper on the current tokio runtime until `token` is cancelled
    pub fn spawn(self, token: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            ticker.tick().await;
            info!(interval_secs = self.interval.as_secs(), "Expiry sweeper started");
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        self.sweep_once();
                    }
                }
            }
            info!("Expiry sweeper stopped");
        })
    }
}
