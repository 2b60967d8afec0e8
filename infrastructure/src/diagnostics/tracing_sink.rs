//! Diagnostics sink backed by `tracing`.

use tracing::error;
use umweltzone_application::{DiagnosticsSink, TrackingPoint};

/// Reports diagnostics events as `tracing` errors on the
/// `umweltzone::diagnostics` target.
#[derive(Debug, Clone, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticsSink for TracingDiagnostics {
    fn record_error(&self, point: TrackingPoint, detail: &str) {
        error!(target: "umweltzone::diagnostics", point = %point, detail, "Content error tracked");
    }
}
