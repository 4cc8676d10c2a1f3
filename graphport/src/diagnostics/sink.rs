//! Diagnostic sink trait and implementations.

use tracing::warn;

/// Trait for sinks receiving warning-level export diagnostics.
///
/// Each warning carries the kind of the stage (or predictor) it concerns,
/// so callers can attribute degraded contributions to a pipeline element.
pub trait DiagnosticSink: Send + Sync {
    /// Reports a warning for the given stage kind.
    fn warning(&self, stage_kind: &str, message: &str);
}

/// A sink that discards all diagnostics.
///
/// Used as the default when no sink is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl DiagnosticSink for NoOpSink {
    fn warning(&self, _stage_kind: &str, _message: &str) {
        // Intentionally empty - discards all diagnostics
    }
}

/// A sink that logs diagnostics through the tracing framework.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warning(&self, stage_kind: &str, message: &str) {
        warn!(stage_kind = %stage_kind, "{message}");
    }
}

/// A collecting sink for testing purposes.
#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: parking_lot::RwLock<Vec<(String, String)>>,
}

impl CollectingSink {
    /// Creates a new collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected `(stage_kind, message)` pairs.
    #[must_use]
    pub fn warnings(&self) -> Vec<(String, String)> {
        self.warnings.read().clone()
    }

    /// Returns the number of collected warnings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.read().len()
    }

    /// Returns true if no warnings have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns warnings attributed to the given stage kind.
    #[must_use]
    pub fn warnings_for(&self, stage_kind: &str) -> Vec<String> {
        self.warnings()
            .into_iter()
            .filter(|(kind, _)| kind == stage_kind)
            .map(|(_, message)| message)
            .collect()
    }
}

impl DiagnosticSink for CollectingSink {
    fn warning(&self, stage_kind: &str, message: &str) {
        self.warnings
            .write()
            .push((stage_kind.to_string(), message.to_string()));
    }
}
