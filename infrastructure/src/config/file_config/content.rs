//! Content configuration from TOML (`[content]` section)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use umweltzone_domain::{DomainError, Locale};

/// Raw content configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContentConfig {
    /// Directory holding the resource folders
    pub root: PathBuf,
    /// Folder inside `root` holding the JSON datasets
    pub folder: String,
    /// Locale tag (e.g. "de_DE"); detected from the environment when unset
    pub locale: Option<String>,
    /// Date formats keyed by locale tag or language
    pub date_formats: BTreeMap<String, String>,
}

impl Default for FileContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("res"),
            folder: "raw".to_string(),
            locale: None,
            date_formats: BTreeMap::new(),
        }
    }
}

impl FileContentConfig {
    /// Canonical locale tag of a `date_formats` key.
    ///
    /// `de_de`, `de-DE` and `DE_DE` all name `de_DE`. Keys set through
    /// environment variables arrive lowercased.
    pub fn date_format_tag(key: &str) -> Result<String, DomainError> {
        key.parse::<Locale>().map(|locale| locale.tag())
    }
}
