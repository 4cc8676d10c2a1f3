//! Finalization naming and output writing.

use crate::errors::ExportError;
use crate::export::config::ExportConfig;
use crate::graph::GraphModel;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Resolves the graph name for a run: the explicit configured name, else
/// the binary output path's file stem, else absent.
#[must_use]
pub fn resolve_graph_name(config: &ExportConfig) -> Option<String> {
    config.graph_name.clone().or_else(|| {
        config
            .binary_path
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
    })
}

/// Writes the finalized model to the configured output paths.
///
/// The binary form goes to the binary path if set. The text path, if set,
/// receives the indented rendering of the model re-parsed from its binary
/// bytes, so the two forms always agree. Neither path set means nothing is
/// written.
pub fn save(model: &GraphModel, config: &ExportConfig) -> Result<(), ExportError> {
    if config.binary_path.is_none() && config.text_path.is_none() {
        return Ok(());
    }

    let bytes = model.to_bytes()?;

    if let Some(path) = &config.binary_path {
        fs::write(path, &bytes).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote binary graph");
    }

    if let Some(path) = &config.text_path {
        let reparsed = GraphModel::from_bytes(&bytes)?;
        let text = reparsed.to_pretty_text()?;
        fs::write(path, text).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "wrote text graph");
    }

    Ok(())
}
