//! Autocache - an in-process expiring cache
//!
//! A thread-safe key/value store that keeps each entry together with its
//! creation time and discards entries in a background sweep once they
//! outlive the configured lifetime. Intended as a simple memoization layer
//! for single-process services ("compute this expensive value, keep it warm
//! for N minutes").
//!
//! # Example
//! ```
//! use autocache::CacheStore;
//!
//! tokio_test::block_on(async {
//!     let store = CacheStore::new(60_000, 5_000).unwrap();
//!
//!     let report = store
//!         .get_or_create("weekly-report", || "42 pages".to_string())
//!         .await
//!         .unwrap();
//!     assert_eq!(*report, "42 pages");
//!
//!     store.shutdown();
//! });
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheStore, ResourceHandle, DEFAULT_EVICTION_INTERVAL_MS};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::spawn_eviction_task;
