//! Error types for the boundcache library.
//!
//! ## Key Components
//!
//! - [`CacheError`]: Returned by cache operations and fallible constructors
//!   (missing key on `get`, zero capacity, unknown policy name).
//! - [`InvariantError`]: Returned when the index and the ordering list
//!   disagree (debug-only `check_invariants` methods).
//!
//! ## Example Usage
//!
//! ```
//! use boundcache::error::CacheError;
//! use boundcache::{BoundedCache, EvictionPolicy};
//!
//! let bad = BoundedCache::<u32, &str>::try_new(0, EvictionPolicy::Lru);
//! assert_eq!(bad.unwrap_err(), CacheError::InvalidCapacity { capacity: 0 });
//!
//! let mut cache = BoundedCache::new(2, EvictionPolicy::Fifo);
//! cache.put(1, "one");
//! assert_eq!(cache.get(&7), Err(CacheError::KeyNotFound));
//! ```

use thiserror::Error;

/// Errors surfaced by cache construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// `get` was called for a key with no current entry: never inserted, or
    /// already evicted.
    #[error("key not found")]
    KeyNotFound,
    /// A cache was configured with a capacity below one.
    #[error("cache capacity must be greater than zero, got {capacity}")]
    InvalidCapacity { capacity: usize },
    /// A policy name did not match any known eviction policy.
    #[error("unknown eviction policy '{0}', expected 'fifo' or 'lru'")]
    UnknownPolicy(String),
}

/// Error returned when internal cache invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}
