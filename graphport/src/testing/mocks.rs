//! Mock transforms and predictors.

use crate::export::{Predictor, RoleSet};
use crate::graph::{AttrValue, GraphContext, GraphNode, ValueType};
use crate::pipeline::{Column, GraphTransform, Schema};
use std::sync::Arc;

/// An exportable transform renaming one column.
///
/// Contributes an `Identity` node carrying the old column's variable into a
/// variable named after the new column, and rebinds both names to it.
#[derive(Debug, Clone)]
pub struct RenameTransform {
    from: String,
    to: String,
}

impl RenameTransform {
    /// Creates a rename of `from` into `to`.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl GraphTransform for RenameTransform {
    fn kind(&self) -> &str {
        "Rename"
    }

    fn output_schema(&self, input: &Schema) -> Schema {
        input.renamed(&self.from, &self.to)
    }

    fn is_exportable(&self) -> bool {
        true
    }

    fn contribute(&self, ctx: &mut GraphContext, _input: &Schema) {
        let Some(source) = ctx.try_get_variable(&self.from) else {
            return;
        };
        let source = source.to_string();
        ctx.add_node(
            GraphNode::new(format!("rename_{}", self.to), "Identity")
                .with_input(source)
                .with_output(self.to.clone()),
        );
        ctx.bind(self.from.clone(), self.to.clone());
        ctx.bind(self.to.clone(), self.to.clone());
    }
}

/// An exportable transform multiplying one column by a constant.
///
/// Rebinds the column to a freshly generated variable, shadowing the
/// earlier binding.
#[derive(Debug, Clone)]
pub struct ScaleTransform {
    column: String,
    factor: f64,
}

impl ScaleTransform {
    /// Creates a scale of `column` by `factor`.
    #[must_use]
    pub fn new(column: impl Into<String>, factor: f64) -> Self {
        Self {
            column: column.into(),
            factor,
        }
    }
}

impl GraphTransform for ScaleTransform {
    fn kind(&self) -> &str {
        "Scale"
    }

    fn output_schema(&self, input: &Schema) -> Schema {
        input.clone()
    }

    fn is_exportable(&self) -> bool {
        true
    }

    fn contribute(&self, ctx: &mut GraphContext, _input: &Schema) {
        let Some(source) = ctx.try_get_variable(&self.column) else {
            return;
        };
        let source = source.to_string();
        let output = ctx.fresh_variable(&format!("{}_scaled", self.column));
        ctx.add_node(
            GraphNode::new(format!("scale_{output}"), "Scale")
                .with_input(source)
                .with_output(output.clone())
                .with_attribute("factor", AttrValue::Float(self.factor)),
        );
        ctx.bind(self.column.clone(), output);
    }
}

/// A transform that cannot contribute to the graph.
#[derive(Debug, Clone)]
pub struct OpaqueTransform {
    kind: String,
}

impl OpaqueTransform {
    /// Creates a non-exportable transform reporting the given kind.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

impl GraphTransform for OpaqueTransform {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn output_schema(&self, input: &Schema) -> Schema {
        input.clone()
    }

    fn is_exportable(&self) -> bool {
        false
    }

    fn contribute(&self, _ctx: &mut GraphContext, _input: &Schema) {
        // Never invoked: the walkback excludes non-exportable stages.
    }
}

/// An exportable scoring stage appending a `Score` column.
#[derive(Debug, Clone)]
pub struct ScoreTransform {
    features: Option<String>,
}

impl ScoreTransform {
    /// Creates a scorer reading the given features column, when known.
    #[must_use]
    pub fn new(features: Option<String>) -> Self {
        Self { features }
    }
}

impl GraphTransform for ScoreTransform {
    fn kind(&self) -> &str {
        "LinearScorer"
    }

    fn output_schema(&self, input: &Schema) -> Schema {
        input
            .clone()
            .with_column(Column::new("Score", ValueType::Float))
    }

    fn is_exportable(&self) -> bool {
        true
    }

    fn contribute(&self, ctx: &mut GraphContext, input: &Schema) {
        let mut node = GraphNode::new("scorer", "LinearScorer");
        if let Some(features) = &self.features {
            if let Some(variable) = ctx.try_get_variable(features) {
                node = node.with_input(variable.to_string());
            }
        } else {
            // No features role: score over every bound input column.
            for column in input.iter() {
                if let Some(variable) = ctx.try_get_variable(&column.name) {
                    node = node.with_input(variable.to_string());
                }
            }
        }
        ctx.add_node(node.with_output("Score"));
        ctx.bind("Score", "Score");
    }
}

/// How a [`ConstantPredictor`] answers a scoring-stage request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictorBehavior {
    /// Yields an exportable [`ScoreTransform`].
    Exportable,
    /// Yields a scoring stage that cannot contribute to the graph.
    NotExportable,
    /// Yields no scoring stage at all.
    Unavailable,
}

/// A predictor fixture with scripted scoring-stage behavior.
#[derive(Debug, Clone)]
pub struct ConstantPredictor {
    behavior: PredictorBehavior,
}

impl ConstantPredictor {
    /// Creates a predictor with the given behavior.
    #[must_use]
    pub fn new(behavior: PredictorBehavior) -> Self {
        Self { behavior }
    }
}

impl Predictor for ConstantPredictor {
    fn kind(&self) -> &str {
        "ConstantPredictor"
    }

    fn scoring_transform(
        &self,
        _schema: &Schema,
        roles: Option<&RoleSet>,
    ) -> Option<Arc<dyn GraphTransform>> {
        match self.behavior {
            PredictorBehavior::Exportable => Some(Arc::new(ScoreTransform::new(
                roles.and_then(|r| r.features.clone()),
            ))),
            PredictorBehavior::NotExportable => Some(Arc::new(OpaqueTransform::new("LinearScorer"))),
            PredictorBehavior::Unavailable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::float_columns;

    #[test]
    fn test_rename_contribution() {
        let mut ctx = GraphContext::new(None, None);
        ctx.add_input(ValueType::Float, "A");

        let rename = RenameTransform::new("A", "A2");
        rename.contribute(&mut ctx, &float_columns(&["A"]));

        assert_eq!(ctx.try_get_variable("A"), Some("A2"));
        assert_eq!(ctx.try_get_variable("A2"), Some("A2"));
        assert_eq!(ctx.nodes().len(), 1);
        assert_eq!(ctx.nodes()[0].op_type, "Identity");
    }

    #[test]
    fn test_rename_without_binding_contributes_nothing() {
        let mut ctx = GraphContext::new(None, None);
        let rename = RenameTransform::new("missing", "M2");
        rename.contribute(&mut ctx, &float_columns(&["missing"]));

        assert!(ctx.nodes().is_empty());
        assert_eq!(ctx.try_get_variable("M2"), None);
    }

    #[test]
    fn test_scale_rebinds_to_fresh_variable() {
        let mut ctx = GraphContext::new(None, None);
        ctx.add_input(ValueType::Float, "A");

        let scale = ScaleTransform::new("A", 2.0);
        scale.contribute(&mut ctx, &float_columns(&["A"]));

        let bound = ctx.try_get_variable("A").unwrap();
        assert_ne!(bound, "A");
        assert_eq!(
            ctx.nodes()[0].attributes.get("factor"),
            Some(&AttrValue::Float(2.0))
        );
    }

    #[test]
    fn test_score_transform_appends_score_column() {
        let scorer = ScoreTransform::new(None);
        let out = scorer.output_schema(&float_columns(&["A"]));
        assert!(out.column("Score").is_some());
    }
}
