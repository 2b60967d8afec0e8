//! Bundled content records
//!
//! - [`faq::Faq`]: a question/answer pair
//! - [`zone::LowEmissionZone`]: a named zone with descriptive metadata
//! - [`circuit::Circuit`]: one boundary polygon of a zone
//! - [`zone_key::ZoneKey`]: the cache and dataset key for a zone's circuits

pub mod circuit;
pub mod faq;
pub mod kind;
pub mod zone;
pub mod zone_key;
