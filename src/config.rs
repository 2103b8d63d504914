//! Configuration Module
//!
//! Loads shell and store settings from environment variables.

use std::env;

/// Runtime configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seconds between background sweeps, 0 disables the sweeper
    pub sweep_interval: u64,
    /// Number of keys to preallocate room for
    pub initial_capacity: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 1, 0 = off)
    /// - `INITIAL_CAPACITY` - Preallocated key slots (default: 0)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            sweep_interval: parse_var("SWEEP_INTERVAL").unwrap_or(defaults.sweep_interval),
            initial_capacity: parse_var("INITIAL_CAPACITY").unwrap_or(defaults.initial_capacity),
        }
    }

    /// Whether a background sweeper should run.
    pub fn sweeper_enabled(&self) -> bool {
        self.sweep_interval > 0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sweep_interval: 1,
            initial_capacity: 0,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
