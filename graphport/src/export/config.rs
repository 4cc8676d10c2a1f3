//! Export configuration and drop-list parsing.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// A case-sensitive set of column names to exclude from the graph.
///
/// Parsed once from comma-separated user input; empty by default. Blank
/// fragments (`"A,,B"`, trailing commas) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropSet(HashSet<String>);

impl DropSet {
    /// Creates an empty drop set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated list of column names.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        Self(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
                .collect(),
        )
    }

    /// Returns true if `column` is in the set.
    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.0.contains(column)
    }

    /// Returns the number of names in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Configuration for one export run.
///
/// Either, both, or neither output path may be set; writing is entirely
/// skipped for unset paths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Destination for the binary-serialized graph.
    pub binary_path: Option<PathBuf>,
    /// Destination for the indented textual rendering.
    pub text_path: Option<PathBuf>,
    /// Graph name; defaults to the binary path's file stem, else absent.
    pub graph_name: Option<String>,
    /// Graph domain; defaults to absent.
    pub graph_domain: Option<String>,
    /// Columns excluded from input declaration (and thereby from outputs).
    pub input_drop: DropSet,
    /// Columns excluded from output binding.
    pub output_drop: DropSet,
    /// Tri-state predictor requirement: `Some(true)` requires a predictor
    /// be present and exportable, or the run fails with a user error.
    pub load_predictor: Option<bool>,
}

impl ExportConfig {
    /// Creates a configuration with all options unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the binary output path.
    #[must_use]
    pub fn with_binary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.binary_path = Some(path.into());
        self
    }

    /// Sets the text output path.
    #[must_use]
    pub fn with_text_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.text_path = Some(path.into());
        self
    }

    /// Sets the graph name.
    #[must_use]
    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = Some(name.into());
        self
    }

    /// Sets the graph domain.
    #[must_use]
    pub fn with_graph_domain(mut self, domain: impl Into<String>) -> Self {
        self.graph_domain = Some(domain.into());
        self
    }

    /// Parses and sets the input drop list.
    #[must_use]
    pub fn with_input_drop(mut self, list: &str) -> Self {
        self.input_drop = DropSet::parse(list);
        self
    }

    /// Parses and sets the output drop list.
    #[must_use]
    pub fn with_output_drop(mut self, list: &str) -> Self {
        self.output_drop = DropSet::parse(list);
        self
    }

    /// Sets the predictor-loading requirement.
    #[must_use]
    pub fn with_load_predictor(mut self, load: bool) -> Self {
        self.load_predictor = Some(load);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_set_parsing() {
        let set = DropSet::parse("A, B,C");
        assert_eq!(set.len(), 3);
        assert!(set.contains("A"));
        assert!(set.contains("B"));
        assert!(set.contains("C"));
    }

    #[test]
    fn test_drop_set_is_case_sensitive() {
        let set = DropSet::parse("Label");
        assert!(set.contains("Label"));
        assert!(!set.contains("label"));
    }

    #[test]
    fn test_drop_set_ignores_blank_fragments() {
        let set = DropSet::parse("A,,B,");
        assert_eq!(set.len(), 2);

        assert!(DropSet::parse("").is_empty());
        assert!(DropSet::parse("  ,  ").is_empty());
    }

    #[test]
    fn test_config_defaults() {
        let config = ExportConfig::new();
        assert!(config.binary_path.is_none());
        assert!(config.text_path.is_none());
        assert!(config.graph_name.is_none());
        assert!(config.graph_domain.is_none());
        assert!(config.input_drop.is_empty());
        assert!(config.output_drop.is_empty());
        assert_eq!(config.load_predictor, None);
    }

    #[test]
    fn test_config_builder() {
        let config = ExportConfig::new()
            .with_binary_path("model.gpb")
            .with_graph_name("my-graph")
            .with_input_drop("C")
            .with_load_predictor(true);

        assert_eq!(
            config.binary_path.as_deref(),
            Some(std::path::Path::new("model.gpb"))
        );
        assert_eq!(config.graph_name.as_deref(), Some("my-graph"));
        assert!(config.input_drop.contains("C"));
        assert_eq!(config.load_predictor, Some(true));
    }
}
