//! Directory-backed resource bundle
//!
//! Datasets live under a root directory as `<root>/<folder>/<name>.json`,
//! mirroring the folder layout of the bundled application resources:
//!
//! ```text
//! res/
//! └── raw/
//!     ├── faqs_de.json
//!     ├── faqs_en.json
//!     ├── zones_de.json
//!     └── zone_berlin.json
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};
use umweltzone_application::{ResourceId, ResourceResolver, ResourceStreamProvider};

const RESOURCE_EXTENSION: &str = "json";

/// Resource bundle reading JSON files from a directory tree.
///
/// Each resolved file gets a numeric id that stays stable for the
/// lifetime of the bundle.
pub struct DirectoryResourceBundle {
    root: PathBuf,
    registry: Mutex<Registry>,
}

#[derive(Default)]
struct Registry {
    ids: HashMap<PathBuf, ResourceId>,
    paths: Vec<PathBuf>,
}

impl DirectoryResourceBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            registry: Mutex::new(Registry::default()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a resource would be read from, if the name is a plain file stem.
    pub fn resource_path(&self, name: &str, folder: &str) -> Option<PathBuf> {
        if !is_plain_segment(name) || !is_plain_segment(folder) {
            return None;
        }
        Some(
            self.root
                .join(folder)
                .join(format!("{}.{}", name, RESOURCE_EXTENSION)),
        )
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A path segment without separators or parent references.
fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
}

impl ResourceResolver for DirectoryResourceBundle {
    fn resolve(&self, name: &str, folder: &str) -> Option<ResourceId> {
        let Some(path) = self.resource_path(name, folder) else {
            warn!("Rejected resource name {:?} in folder {:?}", name, folder);
            return None;
        };
        if !path.is_file() {
            debug!("No resource file at {}", path.display());
            return None;
        }

        let mut registry = self.registry();
        if let Some(id) = registry.ids.get(&path) {
            return Some(*id);
        }
        let id = ResourceId(registry.paths.len());
        registry.paths.push(path.clone());
        registry.ids.insert(path, id);
        Some(id)
    }
}

impl ResourceStreamProvider for DirectoryResourceBundle {
    fn open(&self, id: ResourceId) -> io::Result<Box<dyn Read + Send>> {
        let path = self
            .registry()
            .paths
            .get(id.0)
            .cloned()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("unknown resource {id}"))
            })?;
        let file = File::open(&path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}
