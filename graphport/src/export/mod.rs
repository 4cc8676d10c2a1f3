//! The pipeline-to-graph compiler.
//!
//! This module provides:
//! - Export configuration and drop-list parsing
//! - The tail-to-source capability walk
//! - Scoring-stage attachment for trained predictors
//! - Input declaration and output binding
//! - Finalization and output writing
//!
//! [`run`] ties the pieces together: walkback, optional scorer attachment,
//! input declaration from the original source schema, forward stage replay
//! into a shared [`GraphContext`], output binding from the current tail
//! schema, finalization, and writing.

mod columns;
mod config;
mod save;
mod scorer;
mod walkback;

pub use columns::{bind_outputs, declare_inputs};
pub use config::{DropSet, ExportConfig};
pub use save::{resolve_graph_name, save};
pub use scorer::{attach_scorer, Predictor, RoleSet};
pub use walkback::{walk_back, Walkback};

use crate::diagnostics::DiagnosticSink;
use crate::errors::ExportError;
use crate::graph::{GraphContext, GraphModel};
use crate::pipeline::{StageChain, View, ViewId};
use tracing::debug;

/// Runs one complete export over the given chain.
///
/// The whole export is a single synchronous pass; each run builds its own
/// [`GraphContext`] from scratch. On success the finalized model has been
/// written to any configured output paths and is returned to the caller.
///
/// # Errors
///
/// Fails before anything is written when `load_predictor` is `Some(true)`
/// and no exportable scorer can be attached, and surfaces I/O failures on
/// the configured output paths.
pub fn run(
    chain: &mut StageChain,
    tail: ViewId,
    predictor: Option<&dyn Predictor>,
    roles: Option<RoleSet>,
    config: &ExportConfig,
    sink: &dyn DiagnosticSink,
) -> Result<GraphModel, ExportError> {
    let walk = walk_back(chain, tail, sink);
    let mut transforms = walk.transforms;
    let mut tail = walk.true_end;

    if let Some(scorer_tail) =
        attach_scorer(chain, tail, predictor, roles, config.load_predictor, sink)?
    {
        transforms.push(scorer_tail);
        tail = scorer_tail;
    }

    let mut ctx = GraphContext::new(resolve_graph_name(config), config.graph_domain.clone());

    let source_schema = chain.schema_of(walk.source).clone();
    declare_inputs(&mut ctx, &source_schema, &config.input_drop);

    for id in &transforms {
        let View::Stage { transform, prev, .. } = chain.view(*id) else {
            continue;
        };
        let transform = transform.clone();
        let input_schema = chain.schema_of(*prev).clone();
        debug!(stage = transform.kind(), "replaying stage contribution");
        transform.contribute(&mut ctx, &input_schema);
    }

    let tail_schema = chain.schema_of(tail).clone();
    bind_outputs(&mut ctx, &tail_schema, &config.input_drop, &config.output_drop);

    let model = ctx.make_model();
    save(&model, config)?;
    Ok(model)
}
