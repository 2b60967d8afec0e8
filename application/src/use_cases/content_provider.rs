//! Content provider use case
//!
//! [`ContentProvider`] is the read API the rest of the application uses
//! for bundled content. It is constructed once at startup and shared by
//! reference; it owns the circuit cache and, through its loader, the
//! resource-id cache.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use umweltzone_application::{
//!     ContentConfig, ContentLoader, ContentProvider, InMemoryResourceBundle,
//! };
//!
//! let bundle = InMemoryResourceBundle::new()
//!     .with_raw("zone_berlin", "[[[52.5, 13.4], [52.6, 13.5]]]");
//! let config = ContentConfig::default();
//! let loader = ContentLoader::from_bundle(Arc::new(bundle), &config).unwrap();
//! let provider = ContentProvider::new(loader, &config).unwrap();
//!
//! let circuits = provider.get_circuits("berlin").unwrap();
//! assert_eq!(circuits[0].points.len(), 2);
//! ```

use super::load_content::{ContentError, ContentLoader};
use crate::cache::{BoundedCache, CacheError};
use crate::config::ContentConfig;
use std::sync::Arc;
use tracing::debug;
use umweltzone_domain::{
    Circuit, Faq, Locale, LowEmissionZone, ZONES_DATASET, ZoneKey, select_faq_dataset, zone_key,
};

pub struct ContentProvider {
    loader: ContentLoader,
    circuits: BoundedCache<ZoneKey, Arc<Vec<Circuit>>>,
    locale: Locale,
}

impl ContentProvider {
    pub fn new(loader: ContentLoader, config: &ContentConfig) -> Result<Self, CacheError> {
        Ok(Self {
            loader,
            circuits: BoundedCache::new(config.circuits_capacity)?,
            locale: config.locale.clone(),
        })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// FAQs in the dataset matching the active locale.
    pub fn get_faqs(&self) -> Result<Vec<Faq>, ContentError> {
        let dataset = select_faq_dataset(&self.locale);
        debug!("Locale {} selects {}", self.locale, dataset.resource_name());
        self.loader.load(dataset.resource_name())
    }

    pub fn get_low_emission_zones(&self) -> Result<Vec<LowEmissionZone>, ContentError> {
        self.loader.load(ZONES_DATASET)
    }

    /// Look up a single zone by its logical name.
    pub fn get_zone(&self, zone_name: &str) -> Result<LowEmissionZone, ContentError> {
        self.get_low_emission_zones()?
            .into_iter()
            .find(|zone| zone.name == zone_name)
            .ok_or_else(|| ContentError::UnknownZone(zone_name.to_string()))
    }

    /// Circuits of a zone, served from the cache when recently loaded.
    ///
    /// Repeated calls for a resident zone return the same `Arc` without
    /// touching the bundle. Failed loads are not cached.
    pub fn get_circuits(&self, zone_name: &str) -> Result<Arc<Vec<Circuit>>, ContentError> {
        let key = zone_key(zone_name);
        if let Some(circuits) = self.circuits.get(&key) {
            debug!("Circuit cache hit for {}", key);
            return Ok(circuits);
        }

        debug!("Circuit cache miss for {}", key);
        let circuits = Arc::new(self.loader.load::<Circuit>(&key.resource_name())?);
        if let Some((evicted, _)) = self.circuits.put(key, Arc::clone(&circuits)) {
            debug!("Evicted circuits of {}", evicted);
        }
        Ok(circuits)
    }

    /// Whether a zone's circuits are resident in the cache.
    pub fn is_cached(&self, zone_name: &str) -> bool {
        self.circuits.contains(&zone_key(zone_name))
    }

    pub fn cached_zone_count(&self) -> usize {
        self.circuits.len()
    }
}
