//! Thread-safe wrapper around [`BoundedCache`] (feature `concurrency`).
//!
//! Every call takes one `parking_lot::Mutex` for its whole duration. A read
//! under LRU moves the entry in the list, so reads are writes and there is no
//! reader/writer split to exploit.
//!
//! ```text
//!   Thread 1           Thread 2           Thread 3
//!      │ get(k1)          │ put(k2, v)       │ peek(k3)
//!      ▼                  ▼                  ▼
//!   ┌──────────────────────────────────────────────┐
//!   │        Arc<Mutex<BoundedCache<K, V>>>        │
//!   │   one caller at a time, O(1) critical path   │
//!   └──────────────────────────────────────────────┘
//! ```
//!
//! Values come back as clones because a borrow cannot outlive the guard.
//!
//! ```
//! use boundcache::concurrent::ConcurrentBoundedCache;
//! use boundcache::EvictionPolicy;
//!
//! let cache = ConcurrentBoundedCache::new(2, EvictionPolicy::Lru);
//! let handle = cache.clone();
//! std::thread::spawn(move || handle.put(1, "one".to_string()))
//!     .join()
//!     .unwrap();
//! assert_eq!(cache.get(&1).unwrap(), "one");
//! ```

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::BoundedCache;
use crate::error::CacheError;
use crate::policy::EvictionPolicy;
use crate::traits::ReadOnlyCache;

/// Shared handle to a mutex-guarded [`BoundedCache`]. Clones share storage.
#[derive(Clone)]
pub struct ConcurrentBoundedCache<K, V> {
    inner: Arc<Mutex<BoundedCache<K, V>>>,
}

impl<K, V> ConcurrentBoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Self {
        Self::from_cache(BoundedCache::new(capacity, policy))
    }

    pub fn try_new(capacity: usize, policy: EvictionPolicy) -> Result<Self, CacheError> {
        BoundedCache::try_new(capacity, policy).map(Self::from_cache)
    }

    /// Wraps an existing cache, keeping its contents and order.
    pub fn from_cache(cache: BoundedCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    pub fn put(&self, key: K, value: V) {
        self.inner.lock().put(key, value);
    }

    /// Like [`BoundedCache::get`], returning a clone of the value.
    pub fn get(&self, key: &K) -> Result<V, CacheError>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.inner.lock().policy()
    }
}

impl<K, V> ReadOnlyCache<K> for ConcurrentBoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn contains(&self, key: &K) -> bool {
        ConcurrentBoundedCache::contains(self, key)
    }

    fn len(&self) -> usize {
        ConcurrentBoundedCache::len(self)
    }

    fn capacity(&self) -> usize {
        ConcurrentBoundedCache::capacity(self)
    }
}

impl<K, V> fmt::Debug for ConcurrentBoundedCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.lock();
        f.debug_struct("ConcurrentBoundedCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .field("policy", &cache.policy())
            .finish_non_exhaustive()
    }
}
