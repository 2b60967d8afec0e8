//! Bounded least-recently-used cache
//!
//! A fixed-capacity map where both `get` and `put` count as a touch.
//! Inserting into a full cache evicts the entry touched longest ago.
//! There is no expiry and no invalidation: an entry stays until it is
//! evicted or the cache is cleared.

use lru::LruCache;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache capacity must be at least 1")]
    ZeroCapacity,
}

/// Thread-safe bounded LRU cache.
///
/// Values are cloned out of the cache, so store `Arc`s when callers need
/// to share one instance.
///
/// # Examples
///
/// ```
/// use umweltzone_application::cache::BoundedCache;
///
/// let cache = BoundedCache::new(2).unwrap();
/// cache.put("a", 1);
/// cache.put("b", 2);
/// assert_eq!(cache.get(&"a"), Some(1));
///
/// // "b" is now the least recently used entry
/// cache.put("c", 3);
/// assert!(!cache.contains(&"b"));
/// ```
pub struct BoundedCache<K, V> {
    inner: Mutex<LruCache<K, V>>,
}

impl<K: Hash + Eq, V: Clone> BoundedCache<K, V> {
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(CacheError::ZeroCapacity)?;
        Ok(Self {
            inner: Mutex::new(LruCache::new(capacity)),
        })
    }

    /// Look up a key and mark it most recently used.
    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key).cloned()
    }

    /// Insert or replace a value and mark it most recently used.
    ///
    /// Returns the entry evicted to make room, if any. Replacing an
    /// existing key evicts nothing.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        let mut cache = self.lock();
        if cache.contains(&key) {
            cache.put(key, value);
            return None;
        }
        cache.push(key, value)
    }

    /// Whether a key is resident, without touching it.
    pub fn contains(&self, key: &K) -> bool {
        self.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // Every operation leaves the map consistent, so a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, LruCache<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
