//! Cache Entry Module
//!
//! Defines a single stored value together with its optional expiration instant.

use std::time::{Duration, Instant};

// == Entry ==
/// One key's state: an integer payload and an optional deadline.
///
/// Deadlines are measured on the monotonic clock, so wall-clock adjustments
/// never shorten or extend a TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// The stored value
    pub value: i64,
    /// Expiration instant, None = never expires
    pub expires_at: Option<Instant>,
}

impl Entry {
    // == Constructor ==
    /// Creates a persistent entry (no expiration).
    pub fn new(value: i64) -> Self {
        Self {
            value,
            expires_at: None,
        }
    }

    /// Returns a copy of this entry that expires `ttl` after `now`.
    ///
    /// If `now + ttl` cannot be represented the entry is left without a
    /// deadline instead of wrapping around to an instant in the past.
    pub fn expiring_after(self, now: Instant, ttl: Duration) -> Self {
        Self {
            value: self.value,
            expires_at: now.checked_add(ttl),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of `now`.
    ///
    /// An entry is expired only once `now` is strictly past its deadline.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) => now > deadline,
            None => false,
        }
    }

    // == Time To Live ==
    /// Remaining lifetime as of `now`, or None if the entry never expires.
    ///
    /// Returns `Some(Duration::ZERO)` once the deadline has been reached.
    pub fn ttl_remaining_at(&self, now: Instant) -> Option<Duration> {
        self.expires_at
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
