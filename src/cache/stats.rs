//! Store Statistics Module
//!
//! Counts lookups and expirations observed by a [`Store`](super::Store).

use serde::Serialize;

// == Store Stats ==
/// Snapshot of store activity counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreStats {
    /// `get` calls that returned a value
    pub hits: u64,
    /// `get` calls that found nothing (never set, deleted or expired)
    pub misses: u64,
    /// Entries dropped because their TTL lapsed, lazily or by a sweep
    pub expired: u64,
    /// Completed sweep passes
    pub sweeps: u64,
    /// Entries physically held, including expired ones not yet reclaimed
    pub total_entries: usize,
}

impl StoreStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_expired(&mut self, count: usize) {
        self.expired += count as u64;
    }

    pub(crate) fn record_sweep(&mut self) {
        self.sweeps += 1;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = StoreStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.expired, 0);
        assert_eq!(stats.sweeps, 0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(StoreStats::new().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = StoreStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_record_expired_accumulates() {
        let mut stats = StoreStats::new();
        stats.record_expired(2);
        stats.record_expired(0);
        stats.record_expired(3);
        stats.record_sweep();
        assert_eq!(stats.expired, 5);
        assert_eq!(stats.sweeps, 1);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let mut stats = StoreStats::new();
        stats.record_hit();
        stats.total_entries = 4;

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["hits"], 1);
        assert_eq!(json["misses"], 0);
        assert_eq!(json["total_entries"], 4);
    }
}
