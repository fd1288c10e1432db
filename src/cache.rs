//! # Bounded Cache
//!
//! Fixed-capacity key-value cache whose eviction policy (FIFO or LRU) is a
//! constructor argument rather than a separate type.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                        BoundedCache<K, V>                            │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, SlotId> (index)                                │   │
//!   │   │    key_1 ──────────────┐                                     │   │
//!   │   │    key_2 ────────────┐ │                                     │   │
//!   │   │    key_3 ──────────┐ │ │                                     │   │
//!   │   └────────────────────┼─┼─┼─────────────────────────────────────┘   │
//!   │                        ▼ ▼ ▼                                         │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  IntrusiveList<Entry<K, V>> (ordering)                       │   │
//!   │   │                                                              │   │
//!   │   │  head ──► [k3,v3] ◄──► [k2,v2] ◄──► [k1,v1] ◄── tail         │   │
//!   │   │           newest / most recent        next eviction          │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   │                                                                      │
//!   │   policy: EvictionPolicy   capacity: usize (>= 1, fixed)             │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Method           | Complexity | FIFO                       | LRU                        |
//! |------------------|------------|----------------------------|----------------------------|
//! | `put` (new key)  | O(1) avg   | front, evict tail if full  | front, evict tail if full  |
//! | `put` (existing) | O(1) avg   | overwrite, move to front   | overwrite, move to front   |
//! | `get`            | O(1) avg   | position unchanged         | move to front              |
//! | `peek`           | O(1) avg   | position unchanged         | position unchanged         |
//! | `iter` / `keys`  | O(n)       | front to back              | front to back              |
//!
//! Eviction happens only inside `put` for a new key at capacity. `get` never
//! evicts and a miss never mutates anything.
//!
//! ## Example
//!
//! ```
//! use boundcache::error::CacheError;
//! use boundcache::{BoundedCache, EvictionPolicy};
//!
//! let mut cache = BoundedCache::new(2, EvictionPolicy::Lru);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! assert_eq!(cache.get(&"a"), Ok(&1)); // "a" is now most recent
//! cache.put("c", 3);                   // evicts "b"
//! assert_eq!(cache.get(&"b"), Err(CacheError::KeyNotFound));
//! ```
//!
//! ## Thread Safety
//!
//! `BoundedCache` is not synchronized. `get` takes `&mut self` because LRU
//! reads reorder the list. Enable the `concurrency` feature for a
//! mutex-guarded wrapper.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::ds::{IntrusiveList, SlotId};
#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;
use crate::error::CacheError;
use crate::policy::EvictionPolicy;
use crate::traits::ReadOnlyCache;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Capacity-bounded cache with FIFO or LRU eviction.
///
/// Keys are stored twice (index and list entry), hence `K: Clone`.
pub struct BoundedCache<K, V> {
    index: FxHashMap<K, SlotId>,
    order: IntrusiveList<Entry<K, V>>,
    capacity: usize,
    policy: EvictionPolicy,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. See [`try_new`](Self::try_new).
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Self {
        match Self::try_new(capacity, policy) {
            Ok(cache) => cache,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a cache, rejecting a zero capacity.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    ///
    /// ```
    /// use boundcache::{BoundedCache, EvictionPolicy};
    ///
    /// assert!(BoundedCache::<u8, u8>::try_new(0, EvictionPolicy::Fifo).is_err());
    /// assert!(BoundedCache::<u8, u8>::try_new(1, EvictionPolicy::Fifo).is_ok());
    /// ```
    pub fn try_new(capacity: usize, policy: EvictionPolicy) -> Result<Self, CacheError> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity { capacity });
        }
        debug!(capacity, %policy, "bounded cache created");
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: IntrusiveList::with_capacity(capacity),
            capacity,
            policy,
        })
    }

    /// Inserts or overwrites `key`.
    ///
    /// An existing key gets its value replaced and moves to the front under
    /// both policies. A new key at full capacity first evicts the back entry.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(id) {
                entry.value = value;
            }
            self.order.move_to_front(id);
            self.debug_check_sizes();
            return;
        }

        if self.order.len() >= self.capacity {
            self.evict_back();
        }

        let id = self.order.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);
        self.debug_check_sizes();
    }

    /// Returns the value for `key`.
    ///
    /// Under [`EvictionPolicy::Lru`] a hit moves the entry to the front;
    /// under [`EvictionPolicy::Fifo`] its position is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::KeyNotFound`] if the key has no entry. A miss
    /// does not change the cache.
    pub fn get<Q>(&mut self, key: &Q) -> Result<&V, CacheError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = *self.index.get(key).ok_or(CacheError::KeyNotFound)?;
        if self.policy.promotes_on_get() {
            self.order.move_to_front(id);
        }
        self.order
            .get(id)
            .map(|entry| &entry.value)
            .ok_or(CacheError::KeyNotFound)
    }

    /// Returns the value for `key` without touching its position.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let &id = self.index.get(key)?;
        self.order.get(id).map(|entry| &entry.value)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns the entry the next new-key `put` at capacity would evict.
    pub fn peek_eviction_candidate(&self) -> Option<(&K, &V)> {
        self.order.back().map(|entry| (&entry.key, &entry.value))
    }

    fn evict_back(&mut self) {
        if let Some(evicted) = self.order.pop_back() {
            self.index.remove(&evicted.key);
            trace!(
                len = self.order.len(),
                capacity = self.capacity,
                policy = %self.policy,
                "evicted back entry"
            );
        }
    }

    #[inline]
    fn debug_check_sizes(&self) {
        debug_assert_eq!(self.index.len(), self.order.len());
        debug_assert!(self.order.len() <= self.capacity);
    }

    /// Validates the index/ordering invariants (debug-only).
    ///
    /// Checks that both structures have the same size, that size stays
    /// within capacity, that list links are consistent, and that every
    /// index handle resolves to an entry carrying the same key.
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) -> Result<(), InvariantError>
    where
        K: fmt::Debug,
    {
        if self.index.len() != self.order.len() {
            return Err(InvariantError::new(format!(
                "index has {} keys, ordering has {} entries",
                self.index.len(),
                self.order.len()
            )));
        }
        if self.order.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.order.len(),
                self.capacity
            )));
        }
        self.order.check_links()?;

        for (key, &id) in &self.index {
            match self.order.get(id) {
                Some(entry) if entry.key == *key => {},
                Some(entry) => {
                    return Err(InvariantError::new(format!(
                        "index key {:?} points at entry for {:?}",
                        key, entry.key
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "index key {:?} holds stale handle {:?}",
                        key, id
                    )));
                },
            }
        }
        Ok(())
    }
}

impl<K, V> BoundedCache<K, V> {
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Iterates entries from the front (newest or most recently used) to the
    /// back (next eviction candidate).
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.order.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Keys in the same order as [`iter`](Self::iter).
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.order.iter().map(|entry| &entry.key)
    }
}

impl<K, V> ReadOnlyCache<K> for BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn contains(&self, key: &K) -> bool {
        BoundedCache::contains(self, key)
    }

    fn len(&self) -> usize {
        BoundedCache::len(self)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> Extend<(K, V)> for BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V> fmt::Debug for BoundedCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
