//! Application-level configuration.
//!
//! - [`ContentConfig`]: locale, date patterns and cache sizes for content access

pub mod content_config;

pub use content_config::ContentConfig;
