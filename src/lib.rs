//! miniredis - an in-process key-value store with per-key TTL
//!
//! Integer values under string keys, with lazy eviction on read and an
//! optional background sweep.

pub mod cache;
pub mod config;
pub mod error;
pub mod shell;
pub mod tasks;

pub use cache::{Store, StoreStats, TtlStatus};
pub use config::Config;
pub use error::ShellError;
pub use tasks::spawn_sweep_task;
