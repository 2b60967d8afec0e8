//! Resource bundle ports.
//!
//! Bundled datasets are addressed by a logical name inside a folder (e.g.
//! `zone_berlin` in `raw`). A [`ResourceResolver`] turns that pair into an
//! opaque [`ResourceId`], and a [`ResourceStreamProvider`] opens the bytes
//! behind an id. Infrastructure adapters implement both, usually on one
//! type.

use std::collections::HashMap;
use std::fmt;
use std::io::{self, Cursor, Read};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Folder holding the raw JSON datasets.
pub const RAW_FOLDER: &str = "raw";

/// Opaque handle of a bundled resource, valid for the current process run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub usize);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Port for resolving a logical resource name to a handle.
///
/// `None` means the resource is not bundled. Callers must treat it as a
/// packaging defect, never as an empty dataset. Results must be
/// deterministic for the lifetime of the process.
pub trait ResourceResolver: Send + Sync {
    fn resolve(&self, name: &str, folder: &str) -> Option<ResourceId>;
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for Arc<R> {
    fn resolve(&self, name: &str, folder: &str) -> Option<ResourceId> {
        (**self).resolve(name, folder)
    }
}

/// Port for opening the UTF-8 JSON bytes of a resolved resource.
pub trait ResourceStreamProvider: Send + Sync {
    fn open(&self, id: ResourceId) -> io::Result<Box<dyn Read + Send>>;
}

/// Resource bundle held in memory.
///
/// Used by tests and by callers that embed their datasets in the binary.
/// Counts resolutions and stream opens so callers can observe caching.
#[derive(Default)]
pub struct InMemoryResourceBundle {
    ids: HashMap<(String, String), ResourceId>,
    contents: Vec<Arc<[u8]>>,
    resolve_count: AtomicUsize,
    open_count: AtomicUsize,
}

impl InMemoryResourceBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource to the `raw` folder.
    pub fn with_raw(self, name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.with_resource(RAW_FOLDER, name, bytes)
    }

    /// Add a resource; a later resource with the same name and folder wins.
    pub fn with_resource(mut self, folder: &str, name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        let id = ResourceId(self.contents.len());
        self.contents.push(Arc::from(bytes.into()));
        self.ids.insert((name.to_string(), folder.to_string()), id);
        self
    }

    pub fn resolve_count(&self) -> usize {
        self.resolve_count.load(Ordering::Relaxed)
    }

    pub fn open_count(&self) -> usize {
        self.open_count.load(Ordering::Relaxed)
    }
}

impl ResourceResolver for InMemoryResourceBundle {
    fn resolve(&self, name: &str, folder: &str) -> Option<ResourceId> {
        self.resolve_count.fetch_add(1, Ordering::Relaxed);
        self.ids
            .get(&(name.to_string(), folder.to_string()))
            .copied()
    }
}

impl ResourceStreamProvider for InMemoryResourceBundle {
    fn open(&self, id: ResourceId) -> io::Result<Box<dyn Read + Send>> {
        self.open_count.fetch_add(1, Ordering::Relaxed);
        let bytes = self.contents.get(id.0).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no resource {id}"))
        })?;
        Ok(Box::new(Cursor::new(Arc::clone(bytes))))
    }
}
