//! Diagnostic output for export runs.
//!
//! Warnings are an output channel, not control flow: a stage that cannot
//! contribute to the graph is reported through a [`DiagnosticSink`] and the
//! export continues.

mod sink;

pub use sink::{CollectingSink, DiagnosticSink, NoOpSink, TracingSink};

/// Initializes a default tracing subscriber for binaries and examples.
///
/// Respects `RUST_LOG`. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
