//! Decoder registry

use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use std::io::Read;
use thiserror::Error;
use tracing::warn;
use umweltzone_domain::{Content, ContentKind, DatePattern, DomainError};

/// Settings a decoder may need to interpret a record.
#[derive(Debug, Clone, Default)]
pub struct DecodeContext {
    /// Pattern of date strings in the active locale's datasets.
    pub date_pattern: DatePattern,
}

impl DecodeContext {
    pub fn new(date_pattern: DatePattern) -> Self {
        Self { date_pattern }
    }
}

/// Why a single record could not be decoded.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("{0}")]
    Shape(#[from] serde_json::Error),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Invalid(String),
}

/// Why a dataset could not be decoded.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The stream is not a JSON array of the expected records.
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A custom decoder rejected one record.
    #[error("Invalid {kind} record at index {index}: {source}")]
    Record {
        kind: ContentKind,
        index: usize,
        #[source]
        source: RecordError,
    },
}

type RecordDecoder<T> = Box<dyn Fn(Value, &DecodeContext) -> Result<T, RecordError> + Send + Sync>;

/// Maps record kinds to custom decoders.
///
/// Kinds without a registered decoder use the generic structural decode.
#[derive(Default)]
pub struct DecoderRegistry {
    decoders: HashMap<ContentKind, Box<dyn Any + Send + Sync>>,
}

impl DecoderRegistry {
    /// Registry without any custom decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the decoders every bundled dataset needs.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::circuit::decode_circuit);
        registry
    }

    /// Register the decoder for `T`. A later registration for the same
    /// kind replaces the earlier one.
    pub fn register<T, F>(&mut self, decoder: F)
    where
        T: Content,
        F: Fn(Value, &DecodeContext) -> Result<T, RecordError> + Send + Sync + 'static,
    {
        let decoder: RecordDecoder<T> = Box::new(decoder);
        self.decoders.insert(T::KIND, Box::new(decoder));
    }

    pub fn has_decoder(&self, kind: ContentKind) -> bool {
        self.decoders.contains_key(&kind)
    }

    /// Decode a JSON array of `T` from `reader`.
    pub fn decode<T: Content>(
        &self,
        reader: impl Read,
        context: &DecodeContext,
    ) -> Result<Vec<T>, DecodeError> {
        let Some(entry) = self.decoders.get(&T::KIND) else {
            return Ok(serde_json::from_reader(reader)?);
        };

        let Some(decoder) = entry.downcast_ref::<RecordDecoder<T>>() else {
            warn!(
                "Decoder registered for {} produces another type, using generic decode",
                T::KIND
            );
            return Ok(serde_json::from_reader(reader)?);
        };

        let values: Vec<Value> = serde_json::from_reader(reader)?;
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                decoder(value, context).map_err(|source| DecodeError::Record {
                    kind: T::KIND,
                    index,
                    source,
                })
            })
            .collect()
    }
}
