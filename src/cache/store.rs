//! Cache Store Module
//!
//! Main cache engine combining a shared entry map with a background
//! eviction task.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::cache::resource::reject_resource_handle;
use crate::cache::{CacheEntry, CachedValue, DEFAULT_EVICTION_INTERVAL_MS};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_eviction_task;

// == Cache Store ==
/// Thread-safe key/value store with a uniform entry lifetime and a
/// background sweep that discards entries once they outlive it.
///
/// Values are stored type-erased and handed back as `Arc<T>`, so every
/// caller observes the identical payload retained for a key.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage, shared with the eviction task
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    /// Uniform lifetime applied to every entry
    object_lifetime: Duration,
    /// Background eviction task, aborted on shutdown
    sweeper: JoinHandle<()>,
}

impl CacheStore {
    // == Constructors ==
    /// Creates a new CacheStore and starts its eviction task.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Arguments
    /// * `object_lifetime_ms` - How long entries are kept after creation
    /// * `eviction_interval_ms` - How often the eviction pass runs
    ///
    /// # Errors
    /// Returns `CacheError::InvalidConfig` if either duration is zero.
    pub fn new(object_lifetime_ms: u64, eviction_interval_ms: u64) -> Result<Self> {
        Self::with_config(&Config {
            object_lifetime_ms,
            eviction_interval_ms,
        })
    }

    /// Creates a new CacheStore with the default eviction interval.
    pub fn with_lifetime(object_lifetime_ms: u64) -> Result<Self> {
        Self::new(object_lifetime_ms, DEFAULT_EVICTION_INTERVAL_MS)
    }

    /// Creates a new CacheStore from a configuration, validating it first.
    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let object_lifetime = Duration::from_millis(config.object_lifetime_ms);
        let eviction_interval = Duration::from_millis(config.eviction_interval_ms);

        let entries = Arc::new(RwLock::new(HashMap::new()));
        let sweeper = spawn_eviction_task(Arc::clone(&entries), object_lifetime, eviction_interval);

        Ok(Self {
            entries,
            object_lifetime,
            sweeper,
        })
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `Ok(None)` for a missing key; absence is a normal outcome,
    /// not an error. An entry past its lifetime but not yet swept is still
    /// returned: the background sweep is the only remover.
    ///
    /// # Errors
    /// * `UnsupportedType` if `T` is `Box<dyn ResourceHandle>`
    /// * `TypeMismatch` if the key holds a value of a different type
    pub async fn get<T>(&self, key: &str) -> Result<Option<Arc<T>>>
    where
        T: Any + Send + Sync,
    {
        reject_resource_handle::<T>()?;

        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) => downcast(key, entry.value()).map(Some),
            None => Ok(None),
        }
    }

    // == Get Or Create ==
    /// Returns the value for a key, producing it with `factory` on a miss.
    ///
    /// The factory runs with no lock held, so callers racing on the same
    /// missing key may each invoke their own factory. Only one candidate is
    /// installed; every caller, losers included, receives the value that
    /// was actually retained.
    ///
    /// # Errors
    /// * `UnsupportedType` if `T` is `Box<dyn ResourceHandle>`
    /// * `TypeMismatch` if the key holds a value of a different type
    pub async fn get_or_create<T, F>(&self, key: &str, factory: F) -> Result<Arc<T>>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        reject_resource_handle::<T>()?;

        // Fast path: the key is already populated.
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(key) {
                return downcast(key, entry.value());
            }
        }

        // Compute a candidate with no lock held, then install it only if
        // the key is still vacant.
        let candidate: CachedValue = Arc::new(factory());

        let mut entries = self.entries.write().await;
        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| CacheEntry::new(candidate));
        downcast(key, entry.value())
    }

    // == Insert ==
    /// Stores a value under a key, replacing any existing entry.
    ///
    /// Overwriting resets the age clock for the key.
    ///
    /// # Errors
    /// * `UnsupportedType` if `T` is `Box<dyn ResourceHandle>`
    pub async fn insert<T>(&self, key: String, value: T) -> Result<()>
    where
        T: Any + Send + Sync,
    {
        reject_resource_handle::<T>()?;

        let mut entries = self.entries.write().await;
        entries.insert(key, CacheEntry::new(Arc::new(value)));
        Ok(())
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    // == Object Lifetime ==
    /// Returns the uniform entry lifetime for this store.
    pub fn object_lifetime(&self) -> Duration {
        self.object_lifetime
    }

    // == Shutdown ==
    /// Stops the background eviction task.
    ///
    /// Idempotent. Stored entries are left in place and no per-value
    /// cleanup runs; only explicit overwrites change state afterwards.
    pub fn shutdown(&self) {
        self.sweeper.abort();
    }
}

impl Drop for CacheStore {
    fn drop(&mut self) {
        self.sweeper.abort();
    }
}

// == Downcast ==
/// Converts the type-erased payload back to `Arc<T>`.
fn downcast<T>(key: &str, value: CachedValue) -> Result<Arc<T>>
where
    T: Any + Send + Sync,
{
    value
        .downcast::<T>()
        .map_err(|_| CacheError::TypeMismatch(key.to_string()))
}
