//! Column schemas for pipeline data views.

use crate::graph::ValueType;
use serde::{Deserialize, Serialize};

/// A single schema column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// The column name, unique within one schema instance.
    pub name: String,
    /// The column type.
    #[serde(rename = "type")]
    pub ty: ValueType,
    /// Hidden columns are carried by the pipeline but never bound as
    /// graph outputs.
    #[serde(default)]
    pub hidden: bool,
}

impl Column {
    /// Creates a visible column.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            ty,
            hidden: false,
        }
    }

    /// Marks the column as hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// An ordered sequence of columns attached to a pipeline data view.
///
/// Names are unique within one instance but may collide across views;
/// rename and shadow semantics are resolved by the graph context's variable
/// table, not by the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column, builder style.
    #[must_use]
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Appends a column.
    pub fn push(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Looks a column up by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Iterates the columns in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the schema has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns a copy of the schema with one column renamed.
    ///
    /// Columns other than `from` are untouched; if `from` is absent the
    /// schema is returned unchanged.
    #[must_use]
    pub fn renamed(&self, from: &str, to: &str) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|c| {
                if c.name == from {
                    Column {
                        name: to.to_string(),
                        ty: c.ty.clone(),
                        hidden: c.hidden,
                    }
                } else {
                    c.clone()
                }
            })
            .collect();
        Self { columns }
    }
}

impl From<Vec<Column>> for Schema {
    fn from(columns: Vec<Column>) -> Self {
        Self { columns }
    }
}
