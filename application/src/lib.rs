//! Application layer for umweltzone
//!
//! This crate contains the content access use cases, the caches behind
//! them, and the port definitions that infrastructure adapters implement.
//! It depends only on the domain layer.

pub mod cache;
pub mod config;
pub mod decode;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use cache::{BoundedCache, CacheError, CachingResolver, DEFAULT_CACHE_CAPACITY};
pub use config::ContentConfig;
pub use decode::{DecodeContext, DecodeError, DecoderRegistry, RecordError, decode_circuit};
pub use ports::{
    diagnostics::{DiagnosticsSink, NoDiagnostics, TrackingPoint},
    resource_bundle::{
        InMemoryResourceBundle, RAW_FOLDER, ResourceId, ResourceResolver, ResourceStreamProvider,
    },
};
pub use use_cases::{
    content_provider::ContentProvider,
    load_content::{ContentError, ContentLoader},
};
