//! Scoring-stage derivation and attachment.

use crate::diagnostics::DiagnosticSink;
use crate::errors::ExportError;
use crate::pipeline::{GraphTransform, Schema, StageChain, ViewId};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

/// Column-role bindings used when deriving a scoring stage.
///
/// Every role is optional; a role set with no bound roles is treated as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet {
    /// The label column.
    pub label: Option<String>,
    /// The feature-vector column.
    pub features: Option<String>,
    /// The group-id column.
    pub group: Option<String>,
    /// The example-weight column.
    pub weight: Option<String>,
    /// The example-name column.
    pub name: Option<String>,
}

impl RoleSet {
    /// Conventional column names probed by the default-role fallback.
    const DEFAULT_NAMES: [(&'static str, Role); 5] = [
        ("Label", Role::Label),
        ("Features", Role::Features),
        ("GroupId", Role::Group),
        ("Weight", Role::Weight),
        ("Name", Role::Name),
    ];

    /// Derives roles from a schema by conventional column names.
    ///
    /// Best effort: columns that are absent leave their role unbound, which
    /// is never an error.
    #[must_use]
    pub fn infer(schema: &Schema) -> Self {
        let mut roles = Self::default();
        for (column, role) in Self::DEFAULT_NAMES {
            if schema.column(column).is_none() {
                continue;
            }
            let slot = match role {
                Role::Label => &mut roles.label,
                Role::Features => &mut roles.features,
                Role::Group => &mut roles.group,
                Role::Weight => &mut roles.weight,
                Role::Name => &mut roles.name,
            };
            *slot = Some(column.to_string());
        }
        roles
    }

    /// Returns true if no role is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.features.is_none()
            && self.group.is_none()
            && self.weight.is_none()
            && self.name.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
enum Role {
    Label,
    Features,
    Group,
    Weight,
    Name,
}

/// A trained predictor, supplied by the model loader.
///
/// The export never inspects the predictor beyond asking it for a scoring
/// stage over the pipeline tail's schema.
pub trait Predictor: Debug + Send + Sync {
    /// Returns a stable identifier for the predictor, used in diagnostics.
    fn kind(&self) -> &str;

    /// Derives a scoring stage for this predictor over the given schema
    /// and optional roles, or `None` if no scoring stage applies.
    fn scoring_transform(
        &self,
        schema: &Schema,
        roles: Option<&RoleSet>,
    ) -> Option<Arc<dyn GraphTransform>>;
}

/// Attaches a scoring stage derived from `predictor` to the chain tail.
///
/// Returns the new tail view if a stage was appended. Failure modes follow
/// the `load_predictor` tri-state: with `Some(true)` a missing predictor or
/// a non-contributing scorer is a user-configuration error; otherwise a
/// missing predictor is skipped silently and a degraded scorer is reported
/// through the sink.
pub fn attach_scorer(
    chain: &mut StageChain,
    tail: ViewId,
    predictor: Option<&dyn Predictor>,
    roles: Option<RoleSet>,
    load_predictor: Option<bool>,
    sink: &dyn DiagnosticSink,
) -> Result<Option<ViewId>, ExportError> {
    let required = load_predictor == Some(true);

    let Some(predictor) = predictor else {
        if required {
            return Err(ExportError::PredictorRequired);
        }
        return Ok(None);
    };

    let schema = chain.schema_of(tail).clone();
    let roles = roles.or_else(|| {
        let inferred = RoleSet::infer(&schema);
        if inferred.is_empty() {
            None
        } else {
            Some(inferred)
        }
    });

    match predictor.scoring_transform(&schema, roles.as_ref()) {
        Some(scorer) if scorer.is_exportable() => Ok(Some(chain.push_stage(tail, scorer))),
        Some(scorer) => {
            if required {
                return Err(ExportError::ScorerNotExportable {
                    kind: scorer.kind().to_string(),
                });
            }
            sink.warning(
                scorer.kind(),
                &format!(
                    "scoring stage '{}' cannot contribute to the graph; \
                     the pipeline is exported without a scorer",
                    scorer.kind()
                ),
            );
            Ok(None)
        }
        None => {
            if required {
                return Err(ExportError::ScorerUnavailable {
                    kind: predictor.kind().to_string(),
                });
            }
            sink.warning(
                predictor.kind(),
                &format!(
                    "predictor '{}' does not provide a scoring stage; \
                     the pipeline is exported without a scorer",
                    predictor.kind()
                ),
            );
            Ok(None)
        }
    }
}
