//! JSONL file writer for diagnostics events.
//!
//! Each event is serialized as a single JSON line with `type`,
//! `timestamp` and `detail` fields, appended via a buffered writer.

use serde_json::json;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;
use umweltzone_application::{DiagnosticsSink, TrackingPoint};

/// JSONL diagnostics log that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Appends to an existing file
/// and flushes on `Drop`.
pub struct JsonlDiagnosticsLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlDiagnosticsLog {
    /// Open a log appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create diagnostics log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open diagnostics log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DiagnosticsSink for JsonlDiagnosticsLog {
    fn record_error(&self, point: TrackingPoint, detail: &str) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let record = json!({
            "type": point.as_str(),
            "timestamp": timestamp,
            "detail": detail,
        });

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Events are rare; flush each one so a crash keeps them
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlDiagnosticsLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
