//! Typed variables, attributes, and nodes of the interchange format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The type of a column or graph variable.
///
/// Column types from the pipeline schema are carried through the export
/// opaquely; the graph format only needs a stable tag per variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// 64-bit signed integer.
    Int64,
    /// UTF-8 text.
    String,
    /// Boolean.
    Bool,
    /// A fixed- or unknown-length vector of a scalar type.
    Vector {
        /// The item type.
        item: Box<ValueType>,
        /// The vector length, if known.
        size: Option<usize>,
    },
}

impl ValueType {
    /// Creates a vector type over the given item type.
    #[must_use]
    pub fn vector(item: ValueType, size: Option<usize>) -> Self {
        Self::Vector {
            item: Box::new(item),
            size,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float => write!(f, "float"),
            Self::Double => write!(f, "double"),
            Self::Int64 => write!(f, "int64"),
            Self::String => write!(f, "string"),
            Self::Bool => write!(f, "bool"),
            Self::Vector { item, size: Some(n) } => write!(f, "{item}[{n}]"),
            Self::Vector { item, size: None } => write!(f, "{item}[]"),
        }
    }
}

/// A declared graph input or output variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueInfo {
    /// The variable name.
    pub name: String,
    /// The variable type.
    #[serde(rename = "type")]
    pub ty: ValueType,
}

impl ValueInfo {
    /// Creates a new variable declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A node attribute value.
///
/// Externally tagged so the same definition round-trips through both the
/// binary and the textual codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    /// A single integer.
    Int(i64),
    /// A single float.
    Float(f64),
    /// A single string.
    Str(String),
    /// A list of integers.
    Ints(Vec<i64>),
    /// A list of floats.
    Floats(Vec<f64>),
    /// A list of strings.
    Strs(Vec<String>),
}

/// A single operation node in the exported graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// A unique node name within the graph.
    pub name: String,
    /// The operation this node performs.
    pub op_type: String,
    /// Input variable names, in positional order.
    pub inputs: Vec<String>,
    /// Output variable names, in positional order.
    pub outputs: Vec<String>,
    /// Named attributes, ordered for deterministic serialization.
    #[serde(default)]
    pub attributes: BTreeMap<String, AttrValue>,
}

impl GraphNode {
    /// Creates a new node with no inputs, outputs, or attributes.
    #[must_use]
    pub fn new(name: impl Into<String>, op_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            op_type: op_type.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    /// Appends an input variable.
    #[must_use]
    pub fn with_input(mut self, variable: impl Into<String>) -> Self {
        self.inputs.push(variable.into());
        self
    }

    /// Appends an output variable.
    #[must_use]
    pub fn with_output(mut self, variable: impl Into<String>) -> Self {
        self.outputs.push(variable.into());
        self
    }

    /// Sets a named attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: AttrValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_display() {
        assert_eq!(ValueType::Float.to_string(), "float");
        assert_eq!(
            ValueType::vector(ValueType::Double, Some(4)).to_string(),
            "double[4]"
        );
        assert_eq!(
            ValueType::vector(ValueType::Int64, None).to_string(),
            "int64[]"
        );
    }

    #[test]
    fn test_node_builder() {
        let node = GraphNode::new("scale_0", "Scale")
            .with_input("A")
            .with_output("A_scaled")
            .with_attribute("factor", AttrValue::Float(2.5));

        assert_eq!(node.op_type, "Scale");
        assert_eq!(node.inputs, vec!["A".to_string()]);
        assert_eq!(node.outputs, vec!["A_scaled".to_string()]);
        assert_eq!(node.attributes.get("factor"), Some(&AttrValue::Float(2.5)));
    }

    #[test]
    fn test_node_serialization() {
        let node = GraphNode::new("n0", "Identity")
            .with_input("x")
            .with_output("y");

        let json = serde_json::to_string(&node).unwrap();
        let deserialized: GraphNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, deserialized);
    }
}
