//! Configuration file loading for umweltzone
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `UMWELTZONE_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./umweltzone.toml` or `./.umweltzone.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/umweltzone/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;
mod locale;
mod validation;

pub use error::ConfigError;
pub use file_config::{FileCacheConfig, FileConfig, FileContentConfig, FileDiagnosticsConfig};
pub use loader::ConfigLoader;
pub use locale::detect_locale;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
