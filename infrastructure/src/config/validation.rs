//! Configuration validation results.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A cache capacity is zero.
    ZeroCapacity { field: String },
    /// A date format cannot be parsed.
    InvalidDateFormat { tag: String, value: String },
    /// A date format key is not a locale tag or language.
    InvalidDateFormatKey { key: String },
    /// Several date format keys name the same locale.
    DuplicateDateFormat { tag: String, keys: Vec<String> },
    /// A date format with month names is configured for a non-English locale.
    EnglishMonthNames { tag: String },
    /// The configured locale cannot be parsed.
    InvalidLocale { value: String },
    /// The content root directory does not exist.
    MissingContentRoot { path: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}
