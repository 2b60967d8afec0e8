//! Zone key derivation
//!
//! Circuits for a zone are stored in the dataset `zone_<name>`. The same
//! key namespaces the circuit cache.

use std::fmt;

/// Prefix of every circuit dataset name.
pub const ZONE_KEY_PREFIX: &str = "zone_";

/// Key of a zone's circuit dataset.
///
/// This is a structured key: the cache compares zone names, never the
/// concatenated string, so names that happen to start with the prefix
/// cannot collide with another consumer's entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneKey {
    zone_name: String,
}

impl ZoneKey {
    pub fn zone_name(&self) -> &str {
        &self.zone_name
    }

    /// Name of the bundled dataset holding this zone's circuits.
    pub fn resource_name(&self) -> String {
        format!("{}{}", ZONE_KEY_PREFIX, self.zone_name)
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ZONE_KEY_PREFIX, self.zone_name)
    }
}

/// Derive the key for a zone. Total.
pub fn zone_key(zone_name: impl Into<String>) -> ZoneKey {
    ZoneKey {
        zone_name: zone_name.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name_is_prefixed() {
        assert_eq!(zone_key("Berlin").resource_name(), "zone_Berlin");
        assert_eq!(zone_key("Berlin").to_string(), "zone_Berlin");
    }

    #[test]
    fn test_distinct_names_give_distinct_keys() {
        let names = ["Berlin", "Bremen", "berlin", "Stuttgart"];
        let keys: std::collections::HashSet<_> = names.iter().map(|n| zone_key(*n)).collect();
        assert_eq!(keys.len(), names.len());
    }

    #[test]
    fn test_prefixed_name_is_still_structured() {
        let key = zone_key("zone_Berlin");
        assert_eq!(key.zone_name(), "zone_Berlin");
        assert_eq!(key.resource_name(), "zone_zone_Berlin");
        assert_ne!(key, zone_key("Berlin"));
    }

    #[test]
    fn test_empty_name_is_allowed() {
        assert_eq!(zone_key("").resource_name(), "zone_");
    }
}
