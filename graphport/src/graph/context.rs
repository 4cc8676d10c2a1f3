//! The mutable graph-building context.

use crate::graph::model::GraphModel;
use crate::graph::types::{GraphNode, ValueInfo, ValueType};
use std::collections::HashMap;

/// The shared accumulator threaded through each stage's contribution.
///
/// The context records, for every column name ever produced, the exported
/// variable name currently bound to it. Later stages may rebind a name,
/// shadowing earlier bindings. The context does not inspect which stage
/// called it; correctness of naming is the stage's responsibility.
#[derive(Debug, Default)]
pub struct GraphContext {
    name: Option<String>,
    domain: Option<String>,
    variables: HashMap<String, String>,
    inputs: Vec<ValueInfo>,
    outputs: Vec<ValueInfo>,
    nodes: Vec<GraphNode>,
    fresh_counter: usize,
}

impl GraphContext {
    /// Creates an empty context with the given graph name and domain.
    #[must_use]
    pub fn new(name: Option<String>, domain: Option<String>) -> Self {
        Self {
            name,
            domain,
            ..Self::default()
        }
    }

    /// Registers an input variable named after its column and seeds the
    /// variable table with `name -> name`.
    ///
    /// Duplicate names are a caller error and are not checked here; callers
    /// pre-filter through the drop sets and walk the source schema once.
    pub fn add_input(&mut self, ty: ValueType, name: impl Into<String>) {
        let name = name.into();
        self.variables.insert(name.clone(), name.clone());
        self.inputs.push(ValueInfo::new(name, ty));
    }

    /// Appends a declared output variable.
    ///
    /// The caller must have resolved `variable` through
    /// [`try_get_variable`](Self::try_get_variable) first; the context does
    /// not re-check the binding.
    pub fn add_output(&mut self, ty: ValueType, variable: impl Into<String>) {
        self.outputs.push(ValueInfo::new(variable, ty));
    }

    /// Returns the variable currently bound to `column`, or `None` if the
    /// column was never bound. A missing binding is never fabricated.
    #[must_use]
    pub fn try_get_variable(&self, column: &str) -> Option<&str> {
        self.variables.get(column).map(String::as_str)
    }

    /// Binds `column` to `variable`, shadowing any earlier binding.
    pub fn bind(&mut self, column: impl Into<String>, variable: impl Into<String>) {
        self.variables.insert(column.into(), variable.into());
    }

    /// Returns a graph-unique variable name derived from `hint`.
    #[must_use]
    pub fn fresh_variable(&mut self, hint: &str) -> String {
        let name = format!("{hint}_{}", self.fresh_counter);
        self.fresh_counter += 1;
        name
    }

    /// Appends a node to the graph.
    pub fn add_node(&mut self, node: GraphNode) {
        self.nodes.push(node);
    }

    /// Returns the declared inputs so far.
    #[must_use]
    pub fn inputs(&self) -> &[ValueInfo] {
        &self.inputs
    }

    /// Returns the declared outputs so far.
    #[must_use]
    pub fn outputs(&self) -> &[ValueInfo] {
        &self.outputs
    }

    /// Returns the nodes contributed so far.
    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Finalizes the context into an immutable [`GraphModel`].
    ///
    /// Consumes the context; no further mutation is possible.
    #[must_use]
    pub fn make_model(self) -> GraphModel {
        GraphModel {
            name: self.name,
            domain: self.domain,
            inputs: self.inputs,
            outputs: self.outputs,
            nodes: self.nodes,
        }
    }
}
