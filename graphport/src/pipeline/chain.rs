//! The stage chain arena and the stage capability trait.

use crate::graph::GraphContext;
use crate::pipeline::schema::Schema;
use std::fmt::Debug;
use std::sync::Arc;

/// Trait for pipeline stages that may contribute to the exported graph.
///
/// A stage consumes an upstream data view and produces a new one. Whether
/// it can contribute to the graph format is a declared capability queried
/// through [`is_exportable`](Self::is_exportable); only capable stages ever
/// receive a [`contribute`](Self::contribute) call.
pub trait GraphTransform: Debug + Send + Sync {
    /// Returns a stable identifier for the stage, used in diagnostics.
    fn kind(&self) -> &str;

    /// Computes the schema this stage produces over the given input schema.
    fn output_schema(&self, input: &Schema) -> Schema;

    /// Returns true if the stage can contribute to the target graph format.
    fn is_exportable(&self) -> bool;

    /// Appends this stage's nodes and variable bindings to the context.
    ///
    /// `input` is the schema of the stage's upstream view. Implementations
    /// resolve their input columns through the context's variable table and
    /// rebind their output columns, shadowing earlier bindings as needed.
    fn contribute(&self, ctx: &mut GraphContext, input: &Schema);
}

/// An index into a [`StageChain`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(usize);

/// One data view in the chain arena.
#[derive(Debug)]
pub enum View {
    /// A pure, stage-less source carrying the pipeline's initial schema.
    Source {
        /// The source schema.
        schema: Schema,
    },
    /// A transform stage over an upstream view.
    Stage {
        /// The stage implementation.
        transform: Arc<dyn GraphTransform>,
        /// The schema this stage produces.
        schema: Schema,
        /// The upstream view.
        prev: ViewId,
    },
    /// A composite loader wrapping an inner view; unwrapped before walking.
    CompositeLoader {
        /// The wrapped view.
        inner: ViewId,
    },
}

/// A strictly linear chain of data views.
///
/// Views live in an arena and reference their predecessor by index, so the
/// backward chain carries no ownership cycles. The chain owns each stage;
/// the export only reads it.
#[derive(Debug, Default)]
pub struct StageChain {
    views: Vec<View>,
}

impl StageChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stage-less source view.
    pub fn push_source(&mut self, schema: Schema) -> ViewId {
        self.views.push(View::Source { schema });
        ViewId(self.views.len() - 1)
    }

    /// Adds a stage view over `prev`, computing its output schema.
    pub fn push_stage(&mut self, prev: ViewId, transform: Arc<dyn GraphTransform>) -> ViewId {
        let schema = transform.output_schema(self.schema_of(prev));
        self.views.push(View::Stage {
            transform,
            schema,
            prev,
        });
        ViewId(self.views.len() - 1)
    }

    /// Wraps an existing view in a composite loader.
    pub fn wrap_loader(&mut self, inner: ViewId) -> ViewId {
        self.views.push(View::CompositeLoader { inner });
        ViewId(self.views.len() - 1)
    }

    /// Returns the view at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this chain.
    #[must_use]
    pub fn view(&self, id: ViewId) -> &View {
        &self.views[id.0]
    }

    /// Returns the schema of the view at `id`, looking through loaders.
    #[must_use]
    pub fn schema_of(&self, id: ViewId) -> &Schema {
        match self.view(id) {
            View::Source { schema } | View::Stage { schema, .. } => schema,
            View::CompositeLoader { inner } => self.schema_of(*inner),
        }
    }

    /// Returns the number of views in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Returns true if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
