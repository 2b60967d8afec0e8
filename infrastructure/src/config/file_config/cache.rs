//! Cache configuration from TOML (`[cache]` section)

use serde::{Deserialize, Serialize};
use umweltzone_application::DEFAULT_CACHE_CAPACITY;

/// Raw cache configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    /// Number of zones whose circuits stay decoded
    pub circuits: usize,
    /// Number of resource resolutions remembered
    pub resource_ids: usize,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        Self {
            circuits: DEFAULT_CACHE_CAPACITY,
            resource_ids: DEFAULT_CACHE_CAPACITY,
        }
    }
}
