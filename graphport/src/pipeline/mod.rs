//! The linear pipeline model.
//!
//! This module provides:
//! - Ordered column schemas with hidden-column support
//! - The stage chain arena with explicit predecessor links
//! - The [`GraphTransform`] capability trait implemented by stages

mod chain;
mod schema;

pub use chain::{GraphTransform, StageChain, View, ViewId};
pub use schema::{Column, Schema};
