//! Domain layer for umweltzone
//!
//! This crate contains the records bundled with the application (FAQs,
//! low emission zones, zone circuits) and the value objects used to find
//! and interpret them. It has no dependencies on infrastructure concerns.
//!
//! # Core Concepts
//!
//! ## Content
//!
//! Every bundled dataset is a JSON array of one record kind. Each record
//! type implements [`Content`] and carries a [`ContentKind`] tag, which the
//! application layer uses to pick a decoder.
//!
//! ## Zones and circuits
//!
//! - **Zone**: a low emission area within a city, identified by name
//! - **Circuit**: one boundary polygon of a zone, with an effective-since date
//!
//! Circuits for a zone live in the dataset named by [`ZoneKey::resource_name`].

pub mod content;
pub mod core;
pub mod locale;

// Re-export commonly used types
pub use content::{
    circuit::{Circuit, GeoPoint},
    faq::Faq,
    kind::{Content, ContentKind},
    zone::{Badge, LowEmissionZone, ZoneNumber},
    zone_key::{ZONE_KEY_PREFIX, ZoneKey, zone_key},
};
pub use core::error::DomainError;
pub use locale::{
    dataset::{FaqDataset, ZONES_DATASET, select_faq_dataset},
    date_pattern::{DEFAULT_DATE_PATTERN, DatePattern},
    tag::Locale,
};
