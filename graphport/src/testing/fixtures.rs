//! Schema builders for tests.

use crate::graph::ValueType;
use crate::pipeline::{Column, Schema};

/// Builds a schema of float columns with the given names.
#[must_use]
pub fn float_columns(names: &[&str]) -> Schema {
    let mut schema = Schema::new();
    for name in names {
        schema.push(Column::new(*name, ValueType::Float));
    }
    schema
}

/// The three-column schema `[A: float, B: float, C: string]`.
#[must_use]
pub fn abc_schema() -> Schema {
    Schema::new()
        .with_column(Column::new("A", ValueType::Float))
        .with_column(Column::new("B", ValueType::Float))
        .with_column(Column::new("C", ValueType::String))
}
