//! Eviction policy selection.
//!
//! FIFO and LRU share one cache implementation; the policy only decides
//! whether a successful `get` moves the entry to the front of the ordering.
//!
//! | Policy | `put` new key | `put` existing key | `get` hit        |
//! |--------|---------------|--------------------|------------------|
//! | FIFO   | front         | overwrite, front   | position kept    |
//! | LRU    | front         | overwrite, front   | moved to front   |
//!
//! Policies parse from configuration strings:
//!
//! ```
//! use boundcache::EvictionPolicy;
//!
//! let policy: EvictionPolicy = "LRU".parse().unwrap();
//! assert_eq!(policy, EvictionPolicy::Lru);
//! assert_eq!(EvictionPolicy::Fifo.to_string(), "fifo");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::CacheError;

/// Which entry a full cache gives up when a new key arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EvictionPolicy {
    /// First In, First Out: reads never change eviction order.
    Fifo,
    /// Least Recently Used: reads move the entry to the front.
    #[default]
    Lru,
}

impl EvictionPolicy {
    /// Returns `true` if a read hit refreshes the entry's position.
    #[inline]
    pub fn promotes_on_get(self) -> bool {
        matches!(self, EvictionPolicy::Lru)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EvictionPolicy::Fifo => "fifo",
            EvictionPolicy::Lru => "lru",
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvictionPolicy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(EvictionPolicy::Fifo),
            "lru" => Ok(EvictionPolicy::Lru),
            _ => Err(CacheError::UnknownPolicy(s.to_string())),
        }
    }
}
