//! boundcache: a fixed-capacity key-value cache with FIFO or LRU eviction.
//!
//! One [`BoundedCache`] type serves both policies. Entries live in an
//! [`IntrusiveList`] whose nodes sit in a generation-checked [`SlotArena`];
//! an `FxHashMap` maps each key to its node's [`SlotId`].
//!
//! ```
//! use boundcache::prelude::*;
//!
//! let mut cache = BoundedCache::new(3, EvictionPolicy::Fifo);
//! cache.extend([(1, "one"), (2, "two"), (3, "three")]);
//! cache.put(4, "four");
//! assert_eq!(cache.get(&1), Err(CacheError::KeyNotFound));
//! assert_eq!(cache.get(&4), Ok(&"four"));
//! ```

pub mod builder;
pub mod cache;
#[cfg(feature = "concurrency")]
pub mod concurrent;
pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod traits;

pub use crate::cache::BoundedCache;
#[cfg(feature = "concurrency")]
pub use crate::concurrent::ConcurrentBoundedCache;
pub use crate::ds::{IntrusiveList, SlotArena, SlotId};
pub use crate::error::CacheError;
pub use crate::policy::EvictionPolicy;
