//! The exportable computation graph.
//!
//! This module provides:
//! - Typed variable and node definitions for the interchange format
//! - The finalized, immutable [`GraphModel`] artifact with binary and
//!   textual codecs
//! - The mutable [`GraphContext`] accumulator that stages contribute to

mod context;
mod model;
mod types;

pub use context::GraphContext;
pub use model::GraphModel;
pub use types::{AttrValue, GraphNode, ValueInfo, ValueType};
