//! Error types for graph export.
//!
//! Fatal conditions name the offending configuration option or stage.
//! Partial-capability degradation (a stage or scorer that cannot contribute
//! to the graph) is not an error: it flows through the
//! [`DiagnosticSink`](crate::diagnostics::DiagnosticSink) as a warning and
//! the export proceeds with a truncated contribution.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Predictor loading was explicitly requested but the model has none.
    #[error("'load-predictor' is true, but the model does not contain a predictor")]
    PredictorRequired,

    /// Predictor loading was explicitly requested but no scoring stage
    /// could be derived for the predictor.
    #[error("'load-predictor' is true, but predictor '{kind}' does not provide a scoring stage")]
    ScorerUnavailable {
        /// The predictor kind.
        kind: String,
    },

    /// Predictor loading was explicitly requested but the derived scoring
    /// stage cannot contribute to the graph.
    #[error("'load-predictor' is true, but scoring stage '{kind}' cannot contribute to the graph")]
    ScorerNotExportable {
        /// The scoring stage kind.
        kind: String,
    },

    /// An output path could not be opened or written.
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        /// The offending output path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Encoding or decoding the graph failed.
    #[error("graph serialization failed: {0}")]
    Serialization(String),
}

impl From<bincode::Error> for ExportError {
    fn from(err: bincode::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
