//! Resource-id cache
//!
//! Resolving a resource by name can be slow on some bundle backends.
//! [`CachingResolver`] remembers the last few resolutions, including
//! misses.

use super::bounded::{BoundedCache, CacheError};
use crate::ports::resource_bundle::{ResourceId, ResourceResolver};
use tracing::trace;

/// A [`ResourceResolver`] decorator backed by a bounded LRU cache.
///
/// Both outcomes are cached: a resolver is deterministic per process run,
/// so a missing resource stays missing.
pub struct CachingResolver<R> {
    inner: R,
    cache: BoundedCache<(String, String), Option<ResourceId>>,
}

impl<R: ResourceResolver> CachingResolver<R> {
    pub fn new(inner: R, capacity: usize) -> Result<Self, CacheError> {
        Ok(Self {
            inner,
            cache: BoundedCache::new(capacity)?,
        })
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Number of resolutions currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

impl<R: ResourceResolver> ResourceResolver for CachingResolver<R> {
    fn resolve(&self, name: &str, folder: &str) -> Option<ResourceId> {
        let key = (name.to_string(), folder.to_string());
        if let Some(resolved) = self.cache.get(&key) {
            trace!("Resource id cache hit: {}/{}", folder, name);
            return resolved;
        }

        let resolved = self.inner.resolve(name, folder);
        trace!("Resolved {}/{} to {:?}", folder, name, resolved);
        self.cache.put(key, resolved);
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::resource_bundle::{InMemoryResourceBundle, RAW_FOLDER};

    fn resolver() -> CachingResolver<InMemoryResourceBundle> {
        let bundle = InMemoryResourceBundle::new()
            .with_raw("faqs_de", "[]")
            .with_raw("faqs_en", "[]");
        CachingResolver::new(bundle, 2).unwrap()
    }

    #[test]
    fn test_repeated_resolution_hits_cache() {
        let resolver = resolver();
        let first = resolver.resolve("faqs_de", RAW_FOLDER);
        let second = resolver.resolve("faqs_de", RAW_FOLDER);

        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(resolver.inner().resolve_count(), 1);
    }

    #[test]
    fn test_misses_are_cached() {
        let resolver = resolver();
        assert!(resolver.resolve("zone_atlantis", RAW_FOLDER).is_none());
        assert!(resolver.resolve("zone_atlantis", RAW_FOLDER).is_none());
        assert_eq!(resolver.inner().resolve_count(), 1);
    }

    #[test]
    fn test_folder_is_part_of_key() {
        let resolver = resolver();
        assert!(resolver.resolve("faqs_de", RAW_FOLDER).is_some());
        assert!(resolver.resolve("faqs_de", "drawable").is_none());
        assert_eq!(resolver.inner().resolve_count(), 2);
    }

    #[test]
    fn test_evicted_entries_are_resolved_again() {
        let resolver = resolver();
        resolver.resolve("faqs_de", RAW_FOLDER);
        resolver.resolve("faqs_en", RAW_FOLDER);
        resolver.resolve("zones_de", RAW_FOLDER);
        assert_eq!(resolver.cached_len(), 2);

        resolver.resolve("faqs_de", RAW_FOLDER);
        assert_eq!(resolver.inner().resolve_count(), 4);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(CachingResolver::new(InMemoryResourceBundle::new(), 0).is_err());
    }
}
