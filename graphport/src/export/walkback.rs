//! Tail-to-source capability walk over the stage chain.

use crate::diagnostics::DiagnosticSink;
use crate::pipeline::{StageChain, View, ViewId};

/// The result of walking the chain back from its tail.
#[derive(Debug)]
pub struct Walkback {
    /// The true, stage-less source view of the pipeline.
    pub source: ViewId,
    /// The tail the walk started from, with any composite loader unwrapped.
    pub true_end: ViewId,
    /// Exportable stages in pipeline (source-to-tail) order; possibly empty.
    pub transforms: Vec<ViewId>,
}

/// Walks the chain from `tail` toward its source, collecting the stages
/// able to contribute to the graph.
///
/// The first stage that cannot contribute aborts the whole walk: one
/// warning naming that stage goes to the sink, the accumulated stage list
/// is discarded (including stages nearer the tail that individually
/// qualified), and the remaining chain is followed without capability
/// checks only to locate the true source.
pub fn walk_back(chain: &StageChain, tail: ViewId, sink: &dyn DiagnosticSink) -> Walkback {
    let mut cursor = match chain.view(tail) {
        View::CompositeLoader { inner } => *inner,
        View::Source { .. } | View::Stage { .. } => tail,
    };
    let true_end = cursor;
    let mut transforms = Vec::new();

    loop {
        match chain.view(cursor) {
            View::Source { .. } => break,
            View::CompositeLoader { inner } => cursor = *inner,
            View::Stage { transform, prev, .. } => {
                if transform.is_exportable() {
                    transforms.insert(0, cursor);
                    cursor = *prev;
                } else {
                    sink.warning(
                        transform.kind(),
                        &format!(
                            "stage '{}' cannot contribute to the graph; \
                             the pipeline is exported without its stages",
                            transform.kind()
                        ),
                    );
                    transforms.clear();
                    cursor = *prev;
                    cursor = seek_source(chain, cursor);
                    break;
                }
            }
        }
    }

    Walkback {
        source: cursor,
        true_end,
        transforms,
    }
}

/// Follows predecessor links to the stage-less source, with no capability
/// checks along the way.
fn seek_source(chain: &StageChain, mut cursor: ViewId) -> ViewId {
    loop {
        match chain.view(cursor) {
            View::Source { .. } => return cursor,
            View::Stage { prev, .. } => cursor = *prev,
            View::CompositeLoader { inner } => cursor = *inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use crate::graph::ValueType;
    use crate::pipeline::{Column, Schema};
    use crate::testing::{OpaqueTransform, RenameTransform};
    use std::sync::Arc;

    fn source_schema() -> Schema {
        Schema::new()
            .with_column(Column::new("A", ValueType::Float))
            .with_column(Column::new("B", ValueType::Float))
    }

    #[test]
    fn test_empty_pipeline_source_equals_tail() {
        let mut chain = StageChain::new();
        let source = chain.push_source(source_schema());

        let sink = CollectingSink::new();
        let walk = walk_back(&chain, source, &sink);

        assert_eq!(walk.source, source);
        assert_eq!(walk.true_end, source);
        assert!(walk.transforms.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_all_exportable_chain_collected_in_pipeline_order() {
        let mut chain = StageChain::new();
        let source = chain.push_source(source_schema());
        let s1 = chain.push_stage(source, Arc::new(RenameTransform::new("A", "A2")));
        let s2 = chain.push_stage(s1, Arc::new(RenameTransform::new("B", "B2")));

        let sink = CollectingSink::new();
        let walk = walk_back(&chain, s2, &sink);

        assert_eq!(walk.source, source);
        assert_eq!(walk.true_end, s2);
        assert_eq!(walk.transforms, vec![s1, s2]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_non_exportable_stage_abandons_entire_walk() {
        let mut chain = StageChain::new();
        let source = chain.push_source(source_schema());
        let s1 = chain.push_stage(source, Arc::new(RenameTransform::new("A", "A2")));
        let s2 = chain.push_stage(s1, Arc::new(OpaqueTransform::new("Custom")));
        // Exportable stage nearer the tail is discarded too.
        let s3 = chain.push_stage(s2, Arc::new(RenameTransform::new("B", "B2")));

        let sink = CollectingSink::new();
        let walk = walk_back(&chain, s3, &sink);

        assert_eq!(walk.source, source);
        assert!(walk.transforms.is_empty());
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.warnings()[0].0, "Custom");
    }

    #[test]
    fn test_second_non_exportable_stage_emits_no_further_warning() {
        let mut chain = StageChain::new();
        let source = chain.push_source(source_schema());
        let s1 = chain.push_stage(source, Arc::new(OpaqueTransform::new("Inner")));
        let s2 = chain.push_stage(s1, Arc::new(RenameTransform::new("A", "A2")));
        let s3 = chain.push_stage(s2, Arc::new(OpaqueTransform::new("Outer")));

        let sink = CollectingSink::new();
        let walk = walk_back(&chain, s3, &sink);

        // Only the first failure (nearest the tail) is reported; the rest
        // of the chain is followed without capability checks.
        assert_eq!(walk.source, source);
        assert!(walk.transforms.is_empty());
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.warnings()[0].0, "Outer");
        assert!(sink.warnings_for("Inner").is_empty());
    }

    #[test]
    fn test_composite_loader_tail_is_unwrapped() {
        let mut chain = StageChain::new();
        let source = chain.push_source(source_schema());
        let s1 = chain.push_stage(source, Arc::new(RenameTransform::new("A", "A2")));
        let wrapped = chain.wrap_loader(s1);

        let sink = CollectingSink::new();
        let walk = walk_back(&chain, wrapped, &sink);

        assert_eq!(walk.true_end, s1);
        assert_eq!(walk.transforms, vec![s1]);
    }
}
