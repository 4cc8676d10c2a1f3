//! Testing utilities for graph export.
//!
//! This module provides:
//! - Simple exportable and non-exportable transforms
//! - A configurable predictor for scorer-attachment scenarios
//! - Schema builders for common test shapes
//!
//! Production transform and predictor implementations live with their
//! pipelines; these fixtures exist so the export machinery can be exercised
//! without them.

mod fixtures;
mod mocks;

pub use fixtures::{abc_schema, float_columns};
pub use mocks::{
    ConstantPredictor, OpaqueTransform, PredictorBehavior, RenameTransform, ScaleTransform,
    ScoreTransform,
};
