//! Load content use case
//!
//! Loading a dataset takes three steps:
//!
//! 1. **Resolve** the logical name in its folder to a [`ResourceId`]
//! 2. **Open** the byte stream behind the id
//! 3. **Decode** the stream into records through the [`DecoderRegistry`]
//!
//! A resource that cannot be resolved or opened is a packaging defect:
//! the request fails with a fatal error and is never retried. A dataset
//! that cannot be decoded fails only that request, with an error that is
//! distinct from an empty dataset.

use crate::cache::{CacheError, CachingResolver};
use crate::config::ContentConfig;
use crate::decode::{DecodeContext, DecodeError, DecoderRegistry};
use crate::ports::diagnostics::{DiagnosticsSink, NoDiagnostics, TrackingPoint};
use crate::ports::resource_bundle::{ResourceId, ResourceResolver, ResourceStreamProvider};
use std::io;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};
use umweltzone_domain::Content;

/// Errors that can occur while loading content.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The resource is not part of the bundle.
    #[error("Resource for file path '{path}' not found")]
    ResourceNotFound { path: String },

    /// The resource was resolved but its bytes could not be opened.
    #[error("Resource for file path '{path}' could not be opened: {source}")]
    StreamUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The resource could not be decoded.
    #[error("Failure parsing content for '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: DecodeError,
    },

    /// No zone with this name exists in the zone dataset.
    #[error("Unknown zone: {0}")]
    UnknownZone(String),
}

impl ContentError {
    /// Whether the error indicates a broken bundle rather than bad input.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ContentError::ResourceNotFound { .. } | ContentError::StreamUnavailable { .. }
        )
    }
}

/// Resolves, opens and decodes bundled datasets.
pub struct ContentLoader {
    resolver: CachingResolver<Arc<dyn ResourceResolver>>,
    streams: Arc<dyn ResourceStreamProvider>,
    diagnostics: Arc<dyn DiagnosticsSink>,
    decoders: DecoderRegistry,
    context: DecodeContext,
    folder: String,
}

impl ContentLoader {
    pub fn new(
        resolver: Arc<dyn ResourceResolver>,
        streams: Arc<dyn ResourceStreamProvider>,
        config: &ContentConfig,
    ) -> Result<Self, CacheError> {
        Ok(Self {
            resolver: CachingResolver::new(resolver, config.resource_ids_capacity)?,
            streams,
            diagnostics: Arc::new(NoDiagnostics),
            decoders: DecoderRegistry::with_defaults(),
            context: DecodeContext::new(config.date_pattern()),
            folder: config.folder.clone(),
        })
    }

    /// Loader over a bundle that both resolves and opens resources.
    pub fn from_bundle<B>(bundle: Arc<B>, config: &ContentConfig) -> Result<Self, CacheError>
    where
        B: ResourceResolver + ResourceStreamProvider + 'static,
    {
        Self::new(bundle.clone(), bundle, config)
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_decoders(mut self, decoders: DecoderRegistry) -> Self {
        self.decoders = decoders;
        self
    }

    pub fn decode_context(&self) -> &DecodeContext {
        &self.context
    }

    /// Load a dataset from the configured folder.
    pub fn load<T: Content>(&self, name: &str) -> Result<Vec<T>, ContentError> {
        self.load_from(name, &self.folder)
    }

    /// Load a dataset from an explicit folder.
    pub fn load_from<T: Content>(&self, name: &str, folder: &str) -> Result<Vec<T>, ContentError> {
        let path = format!("{}/{}", folder, name);
        let id = self.resolve(name, folder, &path)?;

        let stream = self.streams.open(id).map_err(|source| {
            error!("Failed to open resource {} ({}): {}", path, id, source);
            self.diagnostics
                .record_error(TrackingPoint::ResourceNotFoundError, &path);
            ContentError::StreamUnavailable {
                path: path.clone(),
                source,
            }
        })?;

        match self.decoders.decode::<T>(stream, &self.context) {
            Ok(records) => {
                info!("Loaded {} {} records from {}", records.len(), T::KIND, path);
                Ok(records)
            }
            Err(source) => {
                error!("Failure parsing content for {}: {}", path, source);
                self.diagnostics
                    .record_error(TrackingPoint::ContentParseError, &path);
                Err(ContentError::Decode {
                    name: name.to_string(),
                    source,
                })
            }
        }
    }

    fn resolve(&self, name: &str, folder: &str, path: &str) -> Result<ResourceId, ContentError> {
        match self.resolver.resolve(name, folder) {
            Some(id) => {
                debug!("Resolved {} to {}", path, id);
                Ok(id)
            }
            None => {
                error!("Resource for file path '{}' not found", path);
                self.diagnostics
                    .record_error(TrackingPoint::ResourceNotFoundError, path);
                Err(ContentError::ResourceNotFound {
                    path: path.to_string(),
                })
            }
        }
    }
}
