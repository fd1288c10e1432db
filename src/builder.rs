//! Cache builder.
//!
//! Collects capacity and policy, possibly from configuration strings, and
//! validates them once at build time.
//!
//! ## Example
//!
//! ```rust
//! use boundcache::builder::CacheBuilder;
//! use boundcache::EvictionPolicy;
//!
//! let mut cache = CacheBuilder::new(100)
//!     .policy(EvictionPolicy::Fifo)
//!     .build::<u64, String>();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Ok(&"hello".to_string()));
//! ```

use std::hash::Hash;

use tracing::debug;

use crate::cache::BoundedCache;
#[cfg(feature = "concurrency")]
use crate::concurrent::ConcurrentBoundedCache;
use crate::error::CacheError;
use crate::policy::EvictionPolicy;

/// Builder for [`BoundedCache`] instances. Policy defaults to LRU.
#[derive(Debug, Clone, Copy)]
pub struct CacheBuilder {
    capacity: usize,
    policy: EvictionPolicy,
}

impl CacheBuilder {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            policy: EvictionPolicy::default(),
        }
    }

    pub fn policy(mut self, policy: EvictionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the policy from a name such as `"fifo"` or `"LRU"`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::UnknownPolicy`] for any other name.
    ///
    /// ```
    /// use boundcache::builder::CacheBuilder;
    ///
    /// let cache = CacheBuilder::new(8).policy_name("fifo").unwrap().build::<u8, u8>();
    /// assert_eq!(cache.policy().to_string(), "fifo");
    /// assert!(CacheBuilder::new(8).policy_name("arc").is_err());
    /// ```
    pub fn policy_name(self, name: &str) -> Result<Self, CacheError> {
        Ok(self.policy(name.parse()?))
    }

    /// Builds the cache.
    ///
    /// # Panics
    ///
    /// Panics if the configured capacity is zero. See [`try_build`](Self::try_build).
    pub fn build<K, V>(self) -> BoundedCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        BoundedCache::new(self.capacity, self.policy)
    }

    /// Builds the cache, returning an error instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] if the capacity is zero.
    pub fn try_build<K, V>(self) -> Result<BoundedCache<K, V>, CacheError>
    where
        K: Eq + Hash + Clone,
    {
        BoundedCache::try_new(self.capacity, self.policy).inspect_err(|err| {
            debug!(capacity = self.capacity, policy = %self.policy, %err, "cache build rejected");
        })
    }

    /// Builds a mutex-guarded cache.
    #[cfg(feature = "concurrency")]
    pub fn try_build_concurrent<K, V>(self) -> Result<ConcurrentBoundedCache<K, V>, CacheError>
    where
        K: Eq + Hash + Clone,
    {
        self.try_build().map(ConcurrentBoundedCache::from_cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_lru() {
        let cache = CacheBuilder::new(3).build::<u64, u64>();
        assert_eq!(cache.policy(), EvictionPolicy::Lru);
        assert_eq!(cache.capacity(), 3);
    }

    #[test]
    fn test_both_policies_basic_ops() {
        for policy in [EvictionPolicy::Fifo, EvictionPolicy::Lru] {
            let mut cache = CacheBuilder::new(10).policy(policy).build::<u64, String>();

            cache.put(1, "one".to_string());
            cache.put(2, "two".to_string());
            assert_eq!(cache.get(&1), Ok(&"one".to_string()));
            assert_eq!(cache.get(&3), Err(CacheError::KeyNotFound));
            assert!(cache.contains(&2));
            assert_eq!(cache.len(), 2);

            cache.put(1, "ONE".to_string());
            assert_eq!(cache.get(&1), Ok(&"ONE".to_string()));
            assert_eq!(cache.len(), 2);
        }
    }

    #[test]
    fn test_capacity_enforcement() {
        let mut cache = CacheBuilder::new(2).build::<u64, &str>();
        cache.put(1, "one");
        cache.put(2, "two");
        cache.put(3, "three");

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
        assert!(cache.contains(&3));
    }

    #[test]
    fn test_try_build_rejects_zero_capacity() {
        let result = CacheBuilder::new(0).try_build::<u8, u8>();
        assert_eq!(result.unwrap_err(), CacheError::InvalidCapacity { capacity: 0 });
    }

    #[test]
    fn test_policy_name_parses_config_strings() {
        let builder = CacheBuilder::new(4).policy_name("FIFO").unwrap();
        assert_eq!(builder.build::<u8, u8>().policy(), EvictionPolicy::Fifo);

        let err = CacheBuilder::new(4).policy_name("random").unwrap_err();
        assert_eq!(err, CacheError::UnknownPolicy("random".to_string()));
    }
}
