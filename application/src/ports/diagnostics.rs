//! Port for error diagnostics.
//!
//! Defines the [`DiagnosticsSink`] trait used to report content problems
//! (missing bundled resources, unparsable datasets) to whatever tracking
//! backend the application runs with.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port records discrete
//! error events that can be counted and shipped.

use std::fmt;

/// Where a diagnostics event was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackingPoint {
    /// A bundled resource could not be resolved or opened.
    ResourceNotFoundError,
    /// A bundled resource could not be decoded.
    ContentParseError,
}

impl TrackingPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingPoint::ResourceNotFoundError => "resource_not_found_error",
            TrackingPoint::ContentParseError => "content_parse_error",
        }
    }
}

impl fmt::Display for TrackingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for recording error events.
///
/// `record_error` is synchronous and non-fallible:
/// implementations must not block for long and must swallow their own
/// failures.
pub trait DiagnosticsSink: Send + Sync {
    /// Record an error event.
    fn record_error(&self, point: TrackingPoint, detail: &str);
}

/// No-op implementation for tests and when diagnostics are disabled.
pub struct NoDiagnostics;

impl DiagnosticsSink for NoDiagnostics {
    fn record_error(&self, _point: TrackingPoint, _detail: &str) {}
}
