//! The finalized graph artifact and its codecs.

use crate::errors::ExportError;
use crate::graph::types::{GraphNode, ValueInfo};
use serde::{Deserialize, Serialize};

/// A finalized, immutable exported graph.
///
/// Produced once per export by
/// [`GraphContext::make_model`](crate::graph::GraphContext::make_model) and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphModel {
    /// The graph name, if configured or derivable.
    pub name: Option<String>,
    /// The graph domain, if configured.
    pub domain: Option<String>,
    /// Declared input variables, in declaration order.
    pub inputs: Vec<ValueInfo>,
    /// Declared output variables, in declaration order.
    pub outputs: Vec<ValueInfo>,
    /// Graph nodes, in contribution order.
    pub nodes: Vec<GraphNode>,
}

impl GraphModel {
    /// Encodes the model to its binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ExportError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes a model from its binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExportError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Renders the model as indented, human-readable text.
    pub fn to_pretty_text(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::ValueType;
    use pretty_assertions::assert_eq;

    fn sample_model() -> GraphModel {
        GraphModel {
            name: Some("sample".to_string()),
            domain: Some("com.example".to_string()),
            inputs: vec![ValueInfo::new("A", ValueType::Float)],
            outputs: vec![ValueInfo::new("A2", ValueType::Float)],
            nodes: vec![GraphNode::new("rename_A2", "Identity")
                .with_input("A")
                .with_output("A2")],
        }
    }

    #[test]
    fn test_binary_round_trip() {
        let model = sample_model();
        let bytes = model.to_bytes().unwrap();
        let reparsed = GraphModel::from_bytes(&bytes).unwrap();
        assert_eq!(model, reparsed);
    }

    #[test]
    fn test_text_agrees_with_reparsed_binary() {
        let model = sample_model();
        let bytes = model.to_bytes().unwrap();
        let reparsed = GraphModel::from_bytes(&bytes).unwrap();
        assert_eq!(
            model.to_pretty_text().unwrap(),
            reparsed.to_pretty_text().unwrap()
        );
    }

    #[test]
    fn test_text_is_indented() {
        let text = sample_model().to_pretty_text().unwrap();
        assert!(text.contains('\n'));
        assert!(text.contains("  \"name\""));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(GraphModel::from_bytes(&[0xff, 0x01]).is_err());
    }
}
