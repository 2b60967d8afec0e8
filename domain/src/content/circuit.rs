//! Circuit record: one boundary polygon of a zone

use super::kind::{Content, ContentKind};
use super::zone::ZoneNumber;
use crate::core::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::InvalidCoordinate { lat, lon });
        }
        Ok(Self { lat, lon })
    }
}

/// Accepted JSON shapes of a point: `[lat, lon]` or `{"lat": .., "lon": ..}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Pair([f64; 2]),
    Object { lat: f64, lon: f64 },
}

impl TryFrom<RawPoint> for GeoPoint {
    type Error = DomainError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        match raw {
            RawPoint::Pair([lat, lon]) | RawPoint::Object { lat, lon } => GeoPoint::new(lat, lon),
        }
    }
}

/// Ordered boundary points of a zone, with the date they apply from.
///
/// The canonical JSON form uses ISO dates (`2020-01-01`). Bundled datasets
/// use a locale-specific date pattern and a bare coordinate form, which
/// need the circuit decoder registered in the application layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    #[serde(default)]
    pub valid_since: Option<NaiveDate>,
    #[serde(default)]
    pub zone_number: Option<ZoneNumber>,
    pub points: Vec<GeoPoint>,
}

impl Circuit {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self {
            valid_since: None,
            zone_number: None,
            points,
        }
    }

    pub fn with_valid_since(mut self, date: NaiveDate) -> Self {
        self.valid_since = Some(date);
        self
    }

    pub fn with_zone_number(mut self, number: ZoneNumber) -> Self {
        self.zone_number = Some(number);
        self
    }

    /// Whether the circuit applies on `date`. Undated circuits always apply.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.valid_since.is_none_or(|since| since <= date)
    }
}

impl Content for Circuit {
    const KIND: ContentKind = ContentKind::Circuit;
}
