//! Bounded caches for loaded content.
//!
//! - [`bounded::BoundedCache`]: thread-safe least-recently-used map
//! - [`resource_ids::CachingResolver`]: remembers resource resolutions

pub mod bounded;
pub mod resource_ids;

pub use bounded::{BoundedCache, CacheError};
pub use resource_ids::CachingResolver;

/// Capacity of the circuit and resource-id caches unless configured otherwise.
pub const DEFAULT_CACHE_CAPACITY: usize = 6;
