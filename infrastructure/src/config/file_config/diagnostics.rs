//! Diagnostics configuration from TOML (`[diagnostics]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw diagnostics configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDiagnosticsConfig {
    /// Append content errors to this JSONL file in addition to the log
    pub jsonl_path: Option<PathBuf>,
}
