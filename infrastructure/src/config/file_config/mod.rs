//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! [`FileConfig::to_content_config`] turns them into the application's
//! [`ContentConfig`].

mod cache;
mod content;
mod diagnostics;

pub use cache::FileCacheConfig;
pub use content::FileContentConfig;
pub use diagnostics::FileDiagnosticsConfig;

use super::error::ConfigError;
use super::locale::detect_locale;
use super::validation::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use umweltzone_application::ContentConfig;
use umweltzone_domain::{DatePattern, Locale};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Content location, locale and date formats
    pub content: FileContentConfig,
    /// Cache sizes
    pub cache: FileCacheConfig,
    /// Diagnostics output
    pub diagnostics: FileDiagnosticsConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Cache capacities
        for (field, value) in [
            ("cache.circuits", self.cache.circuits),
            ("cache.resource_ids", self.cache.resource_ids),
        ] {
            if value == 0 {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::ZeroCapacity {
                        field: field.to_string(),
                    },
                    message: format!("{field}: capacity must be at least 1"),
                });
            }
        }

        // 2. Locale
        if let Some(locale) = &self.content.locale
            && let Err(e) = locale.parse::<Locale>()
        {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidLocale {
                    value: locale.clone(),
                },
                message: format!("content.locale: {e}"),
            });
        }

        // 3. Date formats
        let mut keys_by_tag: BTreeMap<String, Vec<&str>> = BTreeMap::new();
        for (key, value) in &self.content.date_formats {
            let locale = match key.parse::<Locale>() {
                Ok(locale) => locale,
                Err(e) => {
                    issues.push(ConfigIssue {
                        severity: Severity::Error,
                        code: ConfigIssueCode::InvalidDateFormatKey { key: key.clone() },
                        message: format!("content.date_formats.{key}: {e}"),
                    });
                    continue;
                }
            };
            keys_by_tag.entry(locale.tag()).or_default().push(key);

            match DatePattern::new(value) {
                Ok(pattern) if pattern.uses_month_names() && locale.language() != "en" => {
                    issues.push(ConfigIssue {
                        severity: Severity::Warning,
                        code: ConfigIssueCode::EnglishMonthNames { tag: locale.tag() },
                        message: format!(
                            "content.date_formats.{key}: month names in '{value}' are matched in English only"
                        ),
                    });
                }
                Ok(_) => {}
                Err(e) => issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::InvalidDateFormat {
                        tag: key.clone(),
                        value: value.clone(),
                    },
                    message: format!("content.date_formats.{key}: {e}"),
                }),
            }
        }
        for (tag, keys) in keys_by_tag.into_iter().filter(|(_, keys)| keys.len() > 1) {
            let used = keys.last().copied().unwrap_or_default();
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                message: format!(
                    "content.date_formats: keys {} all name {tag}, using '{used}'",
                    keys.join(", ")
                ),
                code: ConfigIssueCode::DuplicateDateFormat {
                    tag,
                    keys: keys.iter().map(|key| key.to_string()).collect(),
                },
            });
        }

        // 4. Content root
        if !self.content.root.is_dir() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::MissingContentRoot {
                    path: self.content.root.display().to_string(),
                },
                message: format!(
                    "content.root: directory '{}' does not exist, every dataset will be missing",
                    self.content.root.display()
                ),
            });
        }

        issues
    }

    /// Build the application configuration.
    ///
    /// `locale_override` wins over `content.locale`, which wins over the
    /// environment.
    pub fn to_content_config(
        &self,
        locale_override: Option<Locale>,
    ) -> Result<ContentConfig, ConfigError> {
        let locale = match (locale_override, &self.content.locale) {
            (Some(locale), _) => locale,
            (None, Some(tag)) => tag.parse().map_err(ConfigError::Locale)?,
            (None, None) => detect_locale(),
        };

        let mut config = ContentConfig::default()
            .with_folder(self.content.folder.clone())
            .with_locale(locale)
            .with_circuits_capacity(self.cache.circuits)
            .with_resource_ids_capacity(self.cache.resource_ids);

        // Keys iterate in byte order, so a lowercased environment key
        // (`de_de`) follows and overrides its file form (`de_DE`).
        for (key, value) in &self.content.date_formats {
            let tag = FileContentConfig::date_format_tag(key).map_err(|source| {
                ConfigError::DateFormatKey {
                    key: key.clone(),
                    source,
                }
            })?;
            let pattern = DatePattern::new(value).map_err(|source| ConfigError::DateFormat {
                tag: key.clone(),
                source,
            })?;
            config = config.with_date_pattern(tag, pattern);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[content]
root = "data"
folder = "json"
locale = "de_DE"

[content.date_formats]
de_DE = "dd.MM.yyyy"

[cache]
circuits = 10
resource_ids = 3

[diagnostics]
jsonl_path = "errors.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.content.folder, "json");
        assert_eq!(config.cache.circuits, 10);
        assert_eq!(config.cache.resource_ids, 3);
        assert_eq!(
            config.diagnostics.jsonl_path.as_deref(),
            Some(std::path::Path::new("errors.jsonl"))
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[cache]\ncircuits = 2\n").unwrap();
        assert_eq!(config.cache.circuits, 2);
        assert_eq!(config.cache.resource_ids, 6);
        assert_eq!(config.content, FileContentConfig::default());
    }

    #[test]
    fn test_validate_reports_all_errors() {
        let mut config = FileConfig::default();
        config.cache.circuits = 0;
        config.content.locale = Some("germany".to_string());
        config
            .content
            .date_formats
            .insert("de".to_string(), "dd.MM.yyyy HH:mm".to_string());

        let errors: Vec<_> = config
            .validate()
            .into_iter()
            .filter(|issue| issue.severity == Severity::Error)
            .map(|issue| issue.code)
            .collect();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ConfigIssueCode::ZeroCapacity {
            field: "cache.circuits".to_string()
        }));
    }

    #[test]
    fn test_validate_warns_on_missing_root() {
        let mut config = FileConfig::default();
        config.content.root = "/nonexistent/umweltzone/res".into();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_to_content_config() {
        let mut config = FileConfig::default();
        config.content.locale = Some("de_DE".to_string());
        config
            .content
            .date_formats
            .insert("de".to_string(), "d.M.yyyy".to_string());
        config.cache.circuits = 3;

        let content = config.to_content_config(None).unwrap();
        assert_eq!(content.locale, Locale::germany());
        assert_eq!(content.circuits_capacity, 3);
        assert_eq!(content.date_pattern().pattern(), "d.M.yyyy");
    }

    #[test]
    fn test_locale_override_wins() {
        let mut config = FileConfig::default();
        config.content.locale = Some("de_DE".to_string());
        let content = config.to_content_config(Some(Locale::us())).unwrap();
        assert_eq!(content.locale, Locale::us());
    }

    #[test]
    fn test_date_format_keys_are_normalized() {
        let mut config = FileConfig::default();
        config.content.locale = Some("de_DE".to_string());
        config
            .content
            .date_formats
            .insert("de_de".to_string(), "MM/dd/yyyy".to_string());

        let content = config.to_content_config(None).unwrap();
        assert_eq!(content.date_pattern().pattern(), "MM/dd/yyyy");
    }

    #[test]
    fn test_lowercased_key_overrides_canonical_key() {
        let mut config = FileConfig::default();
        let formats = &mut config.content.date_formats;
        formats.insert("de_DE".to_string(), "dd.MM.yyyy".to_string());
        formats.insert("de_de".to_string(), "d.M.yyyy".to_string());

        let content = config.to_content_config(Some(Locale::germany())).unwrap();
        assert_eq!(content.date_pattern().pattern(), "d.M.yyyy");

        let codes: Vec<_> = config.validate().into_iter().map(|issue| issue.code).collect();
        assert!(codes.contains(&ConfigIssueCode::DuplicateDateFormat {
            tag: "de_DE".to_string(),
            keys: vec!["de_DE".to_string(), "de_de".to_string()],
        }));
    }

    #[test]
    fn test_invalid_date_format_key() {
        let mut config = FileConfig::default();
        config
            .content
            .date_formats
            .insert("german".to_string(), "dd.MM.yyyy".to_string());

        assert!(config.validate().iter().any(|issue| issue.severity == Severity::Error
            && issue.code
                == ConfigIssueCode::InvalidDateFormatKey {
                    key: "german".to_string()
                }));
        let error = config.to_content_config(Some(Locale::us())).unwrap_err();
        assert!(matches!(error, ConfigError::DateFormatKey { ref key, .. } if key == "german"));
    }

    #[test]
    fn test_month_names_warn_for_non_english_locale() {
        let mut config = FileConfig::default();
        let formats = &mut config.content.date_formats;
        formats.insert("de".to_string(), "d. MMMM yyyy".to_string());
        formats.insert("en_US".to_string(), "MMMM d, yyyy".to_string());

        let warnings: Vec<_> = config
            .validate()
            .into_iter()
            .filter(|issue| matches!(issue.code, ConfigIssueCode::EnglishMonthNames { .. }))
            .map(|issue| issue.code)
            .collect();
        assert_eq!(
            warnings,
            vec![ConfigIssueCode::EnglishMonthNames {
                tag: "de".to_string()
            }]
        );
    }

    #[test]
    fn test_invalid_date_format_is_an_error() {
        let mut config = FileConfig::default();
        config
            .content
            .date_formats
            .insert("de".to_string(), "EEEE".to_string());
        let error = config.to_content_config(Some(Locale::germany())).unwrap_err();
        assert!(matches!(error, ConfigError::DateFormat { ref tag, .. } if tag == "de"));
    }
}
