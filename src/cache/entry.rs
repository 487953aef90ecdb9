//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared, type-erased payload stored by the cache.
pub type CachedValue = Arc<dyn Any + Send + Sync>;

// == Cache Entry ==
/// A single cache entry: a value and the instant it was stored.
///
/// Entries are immutable after construction. Overwriting a key replaces the
/// whole entry, which resets the age clock for that key.
#[derive(Clone)]
pub struct CacheEntry {
    /// The stored value
    value: CachedValue,
    /// Creation instant (monotonic clock)
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry, capturing the current time.
    pub fn new(value: CachedValue) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Value ==
    /// Returns a shared handle to the stored value.
    pub fn value(&self) -> CachedValue {
        Arc::clone(&self.value)
    }

    // == Created At ==
    /// Returns the instant this entry was created.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    // == Age ==
    /// Returns how long ago this entry was created.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}

impl fmt::Debug for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}
