//! The builder seam: every stage of the pipeline implements [`Builder`].
//!
//! Leaf builders write a disjoint slice of the catalog and never look
//! anything up. Composite builders resolve entities created by earlier
//! builders through [`crate::lookup`], guard against re-creating entities that
//! already exist, and link entities together.

use crate::attribute::{AttributeAssigner, AttributeKind, HasAttributes, UpsertAttributes};
use crate::collection::CollectionError;
use crate::graph::ConfigurationGraph;
use crate::lookup::LookupError;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors a builder can raise. All of them are fatal for the build pass.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Collection(#[from] CollectionError),
    #[error("{kind} handle vanished while linking")]
    DanglingHandle { kind: &'static str },
    /// A drop group with this description is already owned by another monster.
    #[error("drop group '{description}' belongs to another monster")]
    ForeignDropGroup { description: String },
}

// ---------------------------------------------------------------------------
// Builder trait
// ---------------------------------------------------------------------------

/// Whether a builder depends on the output of other builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderKind {
    Leaf,
    Composite,
}

/// Shared state handed to a builder for the duration of one `build` call.
pub struct BuildContext<'a> {
    pub graph: &'a mut ConfigurationGraph,
    attributes: &'a dyn AttributeAssigner,
}

impl<'a> BuildContext<'a> {
    pub fn new(graph: &'a mut ConfigurationGraph, attributes: &'a dyn AttributeAssigner) -> Self {
        Self { graph, attributes }
    }

    /// Hand an attribute map to the attribute collaborator.
    pub fn add_attributes(
        &self,
        target: &mut dyn HasAttributes,
        attributes: &[(AttributeKind, f32)],
    ) {
        self.attributes.assign(target, attributes);
    }
}

/// A stage of the configuration build.
pub trait Builder {
    /// Stable name, used for ordering checks and logs.
    fn name(&self) -> &'static str;

    fn kind(&self) -> BuilderKind {
        BuilderKind::Leaf
    }

    /// Names of the builders that must have run before this one.
    fn depends_on(&self) -> &'static [&'static str] {
        &[]
    }

    fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError>;
}

/// Run a single builder against a graph with the default attribute assigner,
/// committing its stage on success and discarding it on failure.
///
/// Handy for running one builder outside a pipeline, e.g. in tests.
pub fn run_builder(
    graph: &mut ConfigurationGraph,
    builder: &dyn Builder,
) -> Result<usize, BuildError> {
    run_builder_with(graph, builder, &UpsertAttributes)
}

/// Like [`run_builder`], with an explicit attribute assigner.
pub fn run_builder_with(
    graph: &mut ConfigurationGraph,
    builder: &dyn Builder,
    attributes: &dyn AttributeAssigner,
) -> Result<usize, BuildError> {
    let result = {
        let mut ctx = BuildContext::new(graph, attributes);
        builder.build(&mut ctx)
    };
    match result {
        Ok(()) => Ok(graph.commit_staged()),
        Err(e) => {
            graph.rollback_staged();
            Err(e)
        }
    }
}
