//! Background Tasks Module
//!
//! # Tasks
//! - TTL Sweep: Reclaims expired store entries at a configured interval

mod sweeper;

pub use sweeper::spawn_sweep_task;
