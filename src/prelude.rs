pub use crate::builder::CacheBuilder;
pub use crate::cache::BoundedCache;
#[cfg(feature = "concurrency")]
pub use crate::concurrent::ConcurrentBoundedCache;
pub use crate::error::CacheError;
pub use crate::policy::EvictionPolicy;
pub use crate::traits::ReadOnlyCache;
