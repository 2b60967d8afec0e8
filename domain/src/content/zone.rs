//! Low emission zone record and zone number badges

use super::kind::{Content, ContentKind};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Emission sticker level required to enter a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ZoneNumber {
    Red = 2,
    Yellow = 3,
    Green = 4,
    LightBlue = 5,
    DarkBlue = 6,
}

impl ZoneNumber {
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Sticker badge shown next to a zone.
    pub fn badge(&self) -> Badge {
        let color_hex = match self {
            ZoneNumber::Red => "#E2001A",
            ZoneNumber::Yellow => "#FFD500",
            ZoneNumber::Green => "#009036",
            ZoneNumber::LightBlue => "#6CB4E4",
            ZoneNumber::DarkBlue => "#004B93",
        };
        Badge {
            label: self.value().to_string(),
            color_hex,
        }
    }
}

impl TryFrom<u8> for ZoneNumber {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ZoneNumber::Red),
            3 => Ok(ZoneNumber::Yellow),
            4 => Ok(ZoneNumber::Green),
            5 => Ok(ZoneNumber::LightBlue),
            6 => Ok(ZoneNumber::DarkBlue),
            other => Err(DomainError::InvalidZoneNumber(other)),
        }
    }
}

impl From<ZoneNumber> for u8 {
    fn from(number: ZoneNumber) -> Self {
        number.value()
    }
}

impl fmt::Display for ZoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Label and color of a zone number sticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub color_hex: &'static str,
}

/// A named low emission zone with descriptive metadata.
///
/// Date-like fields are kept as the strings found in the dataset; only
/// circuits carry parsed dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowEmissionZone {
    /// Logical name, also used to find the zone's circuits (e.g. `berlin`)
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub zone_number: Option<ZoneNumber>,
    #[serde(default)]
    pub zone_number_since: Option<String>,
    #[serde(default)]
    pub next_zone_number_as_of: Option<String>,
    #[serde(default)]
    pub list_of_cities: Vec<String>,
    #[serde(default)]
    pub geometry_source: Option<String>,
    #[serde(default)]
    pub geometry_updated_at: Option<String>,
    #[serde(default)]
    pub url_umwelt_planer: Option<String>,
    #[serde(default)]
    pub url_badge_online: Option<String>,
    #[serde(default)]
    pub further_information: Option<String>,
}

impl LowEmissionZone {
    pub fn badge(&self) -> Option<Badge> {
        self.zone_number.map(|number| number.badge())
    }
}

impl Content for LowEmissionZone {
    const KIND: ContentKind = ContentKind::LowEmissionZone;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_zone() {
        let json = r#"{"name": "berlin", "displayName": "Berlin"}"#;
        let zone: LowEmissionZone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.name, "berlin");
        assert_eq!(zone.display_name, "Berlin");
        assert!(zone.zone_number.is_none());
        assert!(zone.list_of_cities.is_empty());
        assert!(zone.badge().is_none());
    }

    #[test]
    fn test_deserialize_full_zone_ignores_unknown_fields() {
        let json = r#"{
            "name": "ruhrgebiet",
            "displayName": "Ruhrgebiet",
            "zoneNumber": 4,
            "zoneNumberSince": "01.07.2014",
            "listOfCities": ["Bochum", "Dortmund", "Essen"],
            "urlBadgeOnline": "https://example.org/plakette",
            "boundingBox": {"southWest": [51.3, 6.6]}
        }"#;
        let zone: LowEmissionZone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.zone_number, Some(ZoneNumber::Green));
        assert_eq!(zone.zone_number_since.as_deref(), Some("01.07.2014"));
        assert_eq!(zone.list_of_cities, vec!["Bochum", "Dortmund", "Essen"]);
        assert_eq!(zone.badge().unwrap().label, "4");
    }

    #[test]
    fn test_unknown_zone_number_is_rejected() {
        let json = r#"{"name": "x", "displayName": "X", "zoneNumber": 9}"#;
        let result: Result<LowEmissionZone, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_badge_colors_are_distinct() {
        let colors: std::collections::HashSet<_> = [
            ZoneNumber::Red,
            ZoneNumber::Yellow,
            ZoneNumber::Green,
            ZoneNumber::LightBlue,
            ZoneNumber::DarkBlue,
        ]
        .iter()
        .map(|n| n.badge().color_hex)
        .collect();
        assert_eq!(colors.len(), 5);
    }

    #[test]
    fn test_zone_number_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&ZoneNumber::Yellow).unwrap(), "3");
    }
}
