//! Diagnostics sinks: where content errors are reported.
//!
//! - [`TracingDiagnostics`] emits each event as a `tracing` error
//! - [`JsonlDiagnosticsLog`] appends each event to a JSONL file

mod jsonl_log;
mod tracing_sink;

pub use jsonl_log::JsonlDiagnosticsLog;
pub use tracing_sink::TracingDiagnostics;
