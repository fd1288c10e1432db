//! # Cache Traits
//!
//! Operations every cache front-end in this crate shares, regardless of
//! whether it is the single-threaded [`BoundedCache`](crate::BoundedCache) or
//! the lock-guarded `ConcurrentBoundedCache`.
//!
//! Only order-neutral queries live here. `put` and `get` differ in receiver
//! (`&mut self` vs `&self`) and return type (borrow vs clone) between the two
//! front-ends, so they stay inherent methods.
//!
//! ```
//! use boundcache::traits::ReadOnlyCache;
//! use boundcache::{BoundedCache, EvictionPolicy};
//!
//! fn headroom<C: ReadOnlyCache<u64>>(cache: &C) -> usize {
//!     cache.capacity() - cache.len()
//! }
//!
//! let mut cache = BoundedCache::new(4, EvictionPolicy::Lru);
//! cache.put(1u64, "one");
//! assert_eq!(headroom(&cache), 3);
//! ```

/// Read-only cache queries that never affect eviction order.
pub trait ReadOnlyCache<K> {
    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries the cache holds.
    fn capacity(&self) -> usize;
}
