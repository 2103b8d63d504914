//! Cache Module
//!
//! Integer key-value storage with per-key TTL expiration.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::Entry;
pub use stats::StoreStats;
pub use store::{Store, TtlStatus};
