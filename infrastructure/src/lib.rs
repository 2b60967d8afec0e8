//! Infrastructure layer for umweltzone
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod diagnostics;
pub mod resources;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigIssueCode, ConfigLoader, FileCacheConfig, FileConfig,
    FileContentConfig, FileDiagnosticsConfig, Severity, detect_locale,
};
pub use diagnostics::{JsonlDiagnosticsLog, TracingDiagnostics};
pub use resources::DirectoryResourceBundle;
