//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache store.
//!
//! # Tasks
//! - Eviction: removes entries past their lifetime at configured intervals

mod eviction;

pub use eviction::spawn_eviction_task;
