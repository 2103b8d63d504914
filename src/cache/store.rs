//! Store Module
//!
//! Thread-safe key-value storage with lazy and active TTL eviction.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{Entry, StoreStats};

// == TTL Status ==
/// Expiration state of a key as reported by [`Store::ttl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtlStatus {
    /// The key is absent or already expired
    Missing,
    /// The key exists and never expires
    Persistent,
    /// The key exists and expires after the contained duration
    Expiring(Duration),
}

/// State guarded by the store lock.
#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, Entry>,
    stats: StoreStats,
}

// == Store ==
/// In-process key-value store mapping string keys to integers, with optional
/// per-key expiration.
///
/// Every operation takes the same exclusive lock for its whole duration, so
/// callers on different threads always observe a state the map held at some
/// serialization point. Expired entries are never returned: `get` drops them
/// on sight, and [`Store::sweep_expired`] reclaims those nobody reads again.
///
/// Share a store between threads with `Arc<Store>`; independent instances do
/// not interact.
#[derive(Debug, Default)]
pub struct Store {
    inner: Mutex<Inner>,
}

impl Store {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` keys before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::with_capacity(capacity),
                stats: StoreStats::new(),
            }),
        }
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous value and clearing
    /// any pending expiration.
    pub fn set(&self, key: &str, value: i64) {
        let mut inner = self.inner.lock();
        inner.entries.insert(key.to_owned(), Entry::new(value));
        debug!(key, value, "set");
    }

    // == Get ==
    /// Returns the value for `key` if it exists and has not expired.
    ///
    /// An expired entry is removed as part of the lookup, so the result is
    /// indistinguishable from a key that was never set.
    pub fn get(&self, key: &str) -> Option<i64> {
        let now = Instant::now();
        let mut inner = self.inner.lock();

        let value = match inner.entries.get(key).copied() {
            Some(entry) if entry.is_expired_at(now) => {
                inner.entries.remove(key);
                inner.stats.record_expired(1);
                debug!(key, "lazily evicted expired key");
                None
            }
            Some(entry) => Some(entry.value),
            None => None,
        };

        match value {
            Some(_) => inner.stats.record_hit(),
            None => inner.stats.record_miss(),
        }
        value
    }

    // == Delete ==
    /// Removes `key` together with any pending expiration.
    ///
    /// Returns true if the key was physically present. An entry whose TTL has
    /// lapsed but which has not been reclaimed yet still counts as present.
    pub fn del(&self, key: &str) -> bool {
        let removed = self.inner.lock().entries.remove(key).is_some();
        debug!(key, removed, "del");
        removed
    }

    // == Expire ==
    /// Sets `key` to expire `ttl_seconds` from now, replacing any earlier TTL.
    ///
    /// A non-positive TTL deletes the key immediately. Returns false, without
    /// side effects, when the key is absent. Like [`Store::del`], an entry whose
    /// TTL has lapsed but which has not been reclaimed yet counts as present.
    pub fn expire(&self, key: &str, ttl_seconds: i64) -> bool {
        let now = Instant::now();
        let mut inner = self.inner.lock();

        let Some(entry) = inner.entries.get(key).copied() else {
            return false;
        };

        if ttl_seconds <= 0 {
            inner.entries.remove(key);
            debug!(key, ttl_seconds, "non-positive ttl, key deleted");
            return true;
        }

        let ttl = Duration::from_secs(ttl_seconds.unsigned_abs());
        inner
            .entries
            .insert(key.to_owned(), entry.expiring_after(now, ttl));
        debug!(key, ttl_seconds, "expire");
        true
    }

    // == TTL ==
    /// Reports the remaining lifetime of `key`.
    ///
    /// Expired entries are evicted and reported as [`TtlStatus::Missing`].
    pub fn ttl(&self, key: &str) -> TtlStatus {
        let now = Instant::now();
        let mut inner = self.inner.lock();

        let Some(entry) = inner.entries.get(key).copied() else {
            return TtlStatus::Missing;
        };

        if entry.is_expired_at(now) {
            inner.entries.remove(key);
            inner.stats.record_expired(1);
            return TtlStatus::Missing;
        }

        match entry.ttl_remaining_at(now) {
            Some(remaining) => TtlStatus::Expiring(remaining),
            None => TtlStatus::Persistent,
        }
    }

    // == Sweep Expired ==
    /// Removes every entry whose deadline has passed as of the start of the call.
    ///
    /// Returns the number of entries removed. Lookups never depend on this
    /// having run; it only reclaims memory held by keys nobody reads again.
    pub fn sweep_expired(&self) -> usize {
        let now = Instant::now();
        let mut inner = self.inner.lock();

        let before = inner.entries.len();
        inner.entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - inner.entries.len();

        inner.stats.record_expired(removed);
        inner.stats.record_sweep();
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the store counters.
    pub fn stats(&self) -> StoreStats {
        let inner = self.inner.lock();
        let mut stats = inner.stats.clone();
        stats.total_entries = inner.entries.len();
        stats
    }

    // == Length ==
    /// Number of entries physically held, including expired ones not yet reclaimed.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Returns true if no entries are physically held.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }
}
