//! Cache Module
//!
//! Provides an in-memory key/value store with time-based background eviction.

mod entry;
mod resource;
mod store;


// Re-export public types
pub use entry::{CacheEntry, CachedValue};
pub use resource::ResourceHandle;
pub use store::CacheStore;

// == Public Constants ==
/// Default entry lifetime in milliseconds
pub const DEFAULT_OBJECT_LIFETIME_MS: u64 = 300_000; // 5 minutes

/// Default interval between eviction passes in milliseconds
pub const DEFAULT_EVICTION_INTERVAL_MS: u64 = 300_000; // 5 minutes
