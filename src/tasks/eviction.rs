//! Eviction Task
//!
//! Background task that periodically removes cache entries older than the
//! configured lifetime.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheEntry;

/// Spawns a background task that periodically evicts stale cache entries.
///
/// The task sleeps for `eviction_interval` between passes. Each pass takes
/// a write lock on the entry map and removes every entry created before
/// `now - object_lifetime`. Nothing is reported to callers; the pass only
/// logs what it did.
///
/// # Arguments
/// * `entries` - Shared entry map, also used by the owning store
/// * `object_lifetime` - How long entries are kept after creation
/// * `eviction_interval` - Time between eviction passes
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during shutdown.
///
/// # Example
/// ```ignore
/// let entries = Arc::new(RwLock::new(HashMap::new()));
/// let handle = spawn_eviction_task(entries.clone(), lifetime, interval);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_eviction_task(
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    object_lifetime: Duration,
    eviction_interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting eviction task: lifetime {:?}, interval {:?}",
            object_lifetime, eviction_interval
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(eviction_interval).await;

            // Entries created before this instant have outlived the
            // lifetime. None means the process has not been up that long,
            // so nothing can be stale yet.
            let evict_before = match Instant::now().checked_sub(object_lifetime) {
                Some(instant) => instant,
                None => continue,
            };

            let removed = {
                let mut map = entries.write().await;
                evict_stale(&mut map, evict_before)
            };

            if removed > 0 {
                info!("Eviction pass removed {} stale entries", removed);
            } else {
                debug!("Eviction pass found no stale entries");
            }
        }
    })
}

/// Removes every entry created strictly before `evict_before`.
///
/// Returns the number of entries removed. Removal is independent per key;
/// one key never blocks another.
fn evict_stale(map: &mut HashMap<String, CacheEntry>, evict_before: Instant) -> usize {
    let stale_keys: Vec<String> = map
        .iter()
        .filter(|(_, entry)| entry.created_at() < evict_before)
        .map(|(key, _)| key.clone())
        .collect();

    let count = stale_keys.len();

    for key in stale_keys {
        map.remove(&key);
    }

    count
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn entry_with<T: Send + Sync + 'static>(value: T) -> CacheEntry {
        CacheEntry::new(Arc::new(value))
    }

    #[test]
    fn test_evict_stale_removes_only_old_entries() {
        let mut map = HashMap::new();
        map.insert("old".to_string(), entry_with("stale"));

        sleep(Duration::from_millis(30));
        map.insert("fresh".to_string(), entry_with("valid"));

        // Entries older than 15ms are stale; only "old" qualifies.
        let evict_before = Instant::now() - Duration::from_millis(15);
        let removed = evict_stale(&mut map, evict_before);

        assert_eq!(removed, 1);
        assert!(!map.contains_key("old"));
        assert!(map.contains_key("fresh"));
    }

    #[test]
    fn test_evict_stale_keeps_everything_when_nothing_is_old() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), entry_with(1u32));
        map.insert("b".to_string(), entry_with(2u32));

        let evict_before = Instant::now() - Duration::from_millis(500);
        let removed = evict_stale(&mut map, evict_before);

        assert_eq!(removed, 0);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_evict_stale_on_empty_map() {
        let mut map = HashMap::new();

        let removed = evict_stale(&mut map, Instant::now());

        assert_eq!(removed, 0);
        assert!(map.is_empty());
    }

    #[tokio::test]
    async fn test_eviction_task_removes_stale_entries() {
        let entries = Arc::new(RwLock::new(HashMap::new()));

        {
            let mut map = entries.write().await;
            map.insert("expire_soon".to_string(), entry_with("value"));
        }

        let handle = spawn_eviction_task(
            Arc::clone(&entries),
            Duration::from_millis(50),
            Duration::from_millis(50),
        );

        tokio::time::sleep(Duration::from_millis(250)).await;

        assert!(
            entries.read().await.is_empty(),
            "stale entry should have been evicted"
        );
        handle.abort();
    }

    #[tokio::test]
    async fn test_eviction_task_preserves_fresh_entries() {
        let entries = Arc::new(RwLock::new(HashMap::new()));

        {
            let mut map = entries.write().await;
            map.insert("long_lived".to_string(), entry_with("value"));
        }

        let handle = spawn_eviction_task(
            Arc::clone(&entries),
            Duration::from_secs(3600),
            Duration::from_millis(50),
        );

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(
            entries.read().await.len(),
            1,
            "fresh entry should survive the pass"
        );
        handle.abort();
    }

    #[tokio::test]
    async fn test_eviction_task_can_be_aborted() {
        let entries = Arc::new(RwLock::new(HashMap::new()));

        let handle =
            spawn_eviction_task(entries, Duration::from_secs(60), Duration::from_secs(60));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "task should be finished after abort");
    }
}
