//! TTL Sweep Task
//!
//! Background task that periodically reclaims expired store entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Store;

/// Spawns a background task that calls [`Store::sweep_expired`] every
/// `sweep_interval_secs` seconds until aborted.
///
/// The sweep only frees memory held by keys nobody reads again; lookups stay
/// correct without it.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Store::new());
/// let sweeper = spawn_sweep_task(store.clone(), 1);
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_sweep_task(store: Arc<Store>, sweep_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.sweep_expired();
            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
