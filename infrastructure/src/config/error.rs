//! Configuration errors

use thiserror::Error;
use umweltzone_domain::DomainError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid locale in configuration: {0}")]
    Locale(#[source] DomainError),

    #[error("Invalid date format key '{key}': {source}")]
    DateFormatKey {
        key: String,
        #[source]
        source: DomainError,
    },

    #[error("Invalid date format for '{tag}': {source}")]
    DateFormat {
        tag: String,
        #[source]
        source: DomainError,
    },
}
