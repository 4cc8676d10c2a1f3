//! # Graphport
//!
//! Graphport exports a linear chain of data-processing transforms, plus an
//! optional trained predictor, into a portable computation-graph format
//! (nodes, typed variables, inputs, outputs) and serializes that graph to
//! binary and/or indented textual form.
//!
//! The crate provides:
//!
//! - **Graph building**: A mutable [`graph::GraphContext`] accumulating
//!   variables, nodes, and input/output declarations
//! - **Pipeline modeling**: A strictly linear stage chain with explicit
//!   predecessor links ([`pipeline::StageChain`])
//! - **Capability walkback**: Tail-to-source traversal selecting the
//!   stages able to contribute to the graph
//! - **Scorer attachment**: Deriving a scoring stage from a trained
//!   predictor and appending it to the chain
//! - **Serialization**: Binary and human-readable output of the finalized
//!   graph
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use graphport::prelude::*;
//!
//! let mut chain = StageChain::new();
//! let source = chain.push_source(schema);
//! let tail = chain.push_stage(source, transform);
//!
//! let config = ExportConfig::new().with_binary_path("model.gpb");
//! let model = export::run(&mut chain, tail, None, None, &config, &TracingSink)?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod diagnostics;
pub mod errors;
pub mod export;
pub mod graph;
pub mod pipeline;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::diagnostics::{CollectingSink, DiagnosticSink, NoOpSink, TracingSink};
    pub use crate::errors::ExportError;
    pub use crate::export::{self, DropSet, ExportConfig, Predictor, RoleSet};
    pub use crate::graph::{
        AttrValue, GraphContext, GraphModel, GraphNode, ValueInfo, ValueType,
    };
    pub use crate::pipeline::{Column, GraphTransform, Schema, StageChain, View, ViewId};
}
