//! Record kind tags

use serde::de::DeserializeOwned;
use std::fmt;

/// Tag identifying which record type a dataset holds.
///
/// Decoders are registered per kind, so the loader never has to know the
/// concrete record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Faq,
    LowEmissionZone,
    Circuit,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Faq => "faq",
            ContentKind::LowEmissionZone => "low_emission_zone",
            ContentKind::Circuit => "circuit",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record type that can be loaded from a bundled JSON array.
///
/// The `DeserializeOwned` bound provides the generic structural decode,
/// used whenever no custom decoder is registered for [`Content::KIND`].
pub trait Content: DeserializeOwned + Send + Sync + 'static {
    const KIND: ContentKind;
}
