//! Content access configuration.
//!
//! [`ContentConfig`] groups the parameters that control how content is
//! loaded. The infrastructure layer builds it from configuration files.

use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::ports::resource_bundle::RAW_FOLDER;
use std::collections::HashMap;
use umweltzone_domain::{DatePattern, Locale};

#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Folder holding the JSON datasets.
    pub folder: String,
    /// Active locale.
    pub locale: Locale,
    /// Date patterns keyed by locale tag (`de_DE`) or language (`de`).
    pub date_patterns: HashMap<String, DatePattern>,
    /// Number of zones whose circuits stay decoded.
    pub circuits_capacity: usize,
    /// Number of resource resolutions remembered.
    pub resource_ids_capacity: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            folder: RAW_FOLDER.to_string(),
            locale: Locale::default(),
            date_patterns: HashMap::new(),
            circuits_capacity: DEFAULT_CACHE_CAPACITY,
            resource_ids_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl ContentConfig {
    // ==================== Builder Methods ====================

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_date_pattern(mut self, tag: impl Into<String>, pattern: DatePattern) -> Self {
        self.date_patterns.insert(tag.into(), pattern);
        self
    }

    pub fn with_circuits_capacity(mut self, capacity: usize) -> Self {
        self.circuits_capacity = capacity;
        self
    }

    pub fn with_resource_ids_capacity(mut self, capacity: usize) -> Self {
        self.resource_ids_capacity = capacity;
        self
    }

    // ==================== Lookups ====================

    /// Date pattern for the active locale.
    ///
    /// Tries the full tag, then the language, then the default pattern.
    pub fn date_pattern(&self) -> DatePattern {
        self.date_patterns
            .get(&self.locale.tag())
            .or_else(|| self.date_patterns.get(self.locale.language()))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ContentConfig {
        ContentConfig::default()
            .with_date_pattern("de", DatePattern::new("d.M.yyyy").unwrap())
            .with_date_pattern("en_US", DatePattern::new("MM/dd/yyyy").unwrap())
    }

    #[test]
    fn test_defaults() {
        let config = ContentConfig::default();
        assert_eq!(config.folder, "raw");
        assert_eq!(config.circuits_capacity, 6);
        assert_eq!(config.resource_ids_capacity, 6);
        assert_eq!(config.locale, Locale::us());
    }

    #[test]
    fn test_date_pattern_prefers_full_tag() {
        let config = config().with_locale(Locale::us());
        assert_eq!(config.date_pattern().pattern(), "MM/dd/yyyy");
    }

    #[test]
    fn test_date_pattern_falls_back_to_language() {
        let config = config().with_locale("de_AT".parse().unwrap());
        assert_eq!(config.date_pattern().pattern(), "d.M.yyyy");
    }

    #[test]
    fn test_date_pattern_falls_back_to_default() {
        let config = config().with_locale("fr_FR".parse().unwrap());
        assert_eq!(config.date_pattern().pattern(), "dd.MM.yyyy");
    }
}
