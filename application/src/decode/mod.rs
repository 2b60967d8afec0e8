//! Dataset decoding.
//!
//! Datasets are JSON arrays. Most record types map field-for-field onto
//! their JSON and use the generic serde decode. Record types that need
//! extra rules (locale date patterns, alternative shapes) register a
//! decoder in the [`DecoderRegistry`].

pub mod circuit;
pub mod registry;

pub use circuit::decode_circuit;
pub use registry::{DecodeContext, DecodeError, DecoderRegistry, RecordError};
