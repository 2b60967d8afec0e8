//! Locale tags

use crate::core::error::DomainError;
use std::fmt;
use std::str::FromStr;

/// A language with an optional country, as in `de_DE` or `en`.
///
/// Parsing accepts `_` or `-` as separator and drops POSIX encoding and
/// modifier suffixes (`en_US.UTF-8`, `de_DE@euro`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    country: Option<String>,
}

impl Locale {
    pub fn new(language: impl Into<String>, country: Option<&str>) -> Self {
        Self {
            language: language.into().to_ascii_lowercase(),
            country: country.map(|c| c.to_ascii_uppercase()),
        }
    }

    /// German as spoken in Germany (`de_DE`).
    pub fn germany() -> Self {
        Self::new("de", Some("DE"))
    }

    /// English as spoken in the US (`en_US`), the fallback locale.
    pub fn us() -> Self {
        Self::new("en", Some("US"))
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Locale tag with `_` separator, e.g. `de_DE`.
    pub fn tag(&self) -> String {
        self.to_string()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::us()
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let base = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or_default();
        let mut parts = base.split(['_', '-']);

        let language = parts.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(DomainError::InvalidLocale(s.to_string()));
        }

        let country = match parts.next() {
            None => None,
            Some(c) if c.len() == 2 && c.chars().all(|ch| ch.is_ascii_alphabetic()) => Some(c),
            Some(c) if c.len() == 3 && c.chars().all(|ch| ch.is_ascii_digit()) => Some(c),
            Some(_) => return Err(DomainError::InvalidLocale(s.to_string())),
        };

        if parts.next().is_some() {
            return Err(DomainError::InvalidLocale(s.to_string()));
        }

        Ok(Self::new(language, country))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{}", self.language, country),
            None => f.write_str(&self.language),
        }
    }
}
