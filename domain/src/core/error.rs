//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid date pattern '{pattern}': {reason}")]
    InvalidDatePattern { pattern: String, reason: String },

    #[error("Date '{value}' does not match pattern '{pattern}'")]
    DateMismatch { value: String, pattern: String },

    #[error("Invalid locale tag: {0}")]
    InvalidLocale(String),

    #[error("Coordinate out of range: ({lat}, {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("Unknown zone number: {0}")]
    InvalidZoneNumber(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_mismatch_display() {
        let error = DomainError::DateMismatch {
            value: "2020/01/01".to_string(),
            pattern: "dd.MM.yyyy".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Date '2020/01/01' does not match pattern 'dd.MM.yyyy'"
        );
    }

    #[test]
    fn test_invalid_coordinate_display() {
        let error = DomainError::InvalidCoordinate {
            lat: 91.0,
            lon: 13.4,
        };
        assert_eq!(error.to_string(), "Coordinate out of range: (91, 13.4)");
    }
}
