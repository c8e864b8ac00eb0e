//! The orchestrator: runs leaf builders, then composite builders, in a fixed
//! dependency order over one shared graph.
//!
//! ```text
//! NotStarted -> RunningLeafBuilders -> RunningCompositeBuilders -> Done
//!                        \___________________________\_________-> Failed
//! ```
//!
//! Each builder runs inside a staging scope: its records become visible to
//! later builders only after it returns successfully. A failing builder's
//! records are discarded and the pass stops there; there are no retries.

use crate::attribute::{AttributeAssigner, UpsertAttributes};
use crate::builder::{BuildContext, BuildError, Builder, BuilderKind};
use crate::graph::ConfigurationGraph;
use tracing::{debug, info, info_span};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error("builder '{builder}' failed: {source}")]
    Builder {
        builder: &'static str,
        #[source]
        source: BuildError,
    },
    #[error("builder '{builder}' depends on '{missing}', which is not scheduled before it")]
    OutOfOrder {
        builder: &'static str,
        missing: &'static str,
    },
    #[error("builder '{0}' is already scheduled")]
    DuplicateBuilder(&'static str),
    #[error("composite builder '{0}' cannot run in the leaf stage")]
    WrongStage(&'static str),
    #[error("pipeline has already run (state: {0:?})")]
    AlreadyRun(PipelineState),
}

impl PipelineError {
    /// The build error behind a builder failure, if any.
    pub fn build_error(&self) -> Option<&BuildError> {
        match self {
            PipelineError::Builder { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    NotStarted,
    RunningLeafBuilders,
    RunningCompositeBuilders,
    Done,
    /// The pass was abandoned at this builder.
    Failed { builder: &'static str },
}

/// Records committed by one builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderOutcome {
    pub builder: &'static str,
    pub kind: BuilderKind,
    pub committed: usize,
}

/// Summary of a completed pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub outcomes: Vec<BuilderOutcome>,
}

impl BuildReport {
    pub fn total_committed(&self) -> usize {
        self.outcomes.iter().map(|o| o.committed).sum()
    }

    pub fn committed_by(&self, builder: &str) -> Option<usize> {
        self.outcomes
            .iter()
            .find(|o| o.builder == builder)
            .map(|o| o.committed)
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Ordered builder schedule plus the attribute collaborator they share.
pub struct Pipeline {
    leaf: Vec<Box<dyn Builder>>,
    composite: Vec<Box<dyn Builder>>,
    attributes: Box<dyn AttributeAssigner>,
    state: PipelineState,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self::with_attributes(Box::new(UpsertAttributes))
    }

    pub fn with_attributes(attributes: Box<dyn AttributeAssigner>) -> Self {
        Self {
            leaf: Vec::new(),
            composite: Vec::new(),
            attributes,
            state: PipelineState::NotStarted,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Names of all scheduled builders, in run order.
    pub fn schedule(&self) -> Vec<&'static str> {
        self.leaf
            .iter()
            .chain(self.composite.iter())
            .map(|b| b.name())
            .collect()
    }

    fn is_scheduled(&self, name: &str) -> bool {
        self.leaf
            .iter()
            .chain(self.composite.iter())
            .any(|b| b.name() == name)
    }

    fn check_schedulable(&self, builder: &dyn Builder) -> Result<(), PipelineError> {
        if self.state != PipelineState::NotStarted {
            return Err(PipelineError::AlreadyRun(self.state));
        }
        if self.is_scheduled(builder.name()) {
            return Err(PipelineError::DuplicateBuilder(builder.name()));
        }
        for &dep in builder.depends_on() {
            if !self.is_scheduled(dep) {
                return Err(PipelineError::OutOfOrder {
                    builder: builder.name(),
                    missing: dep,
                });
            }
        }
        Ok(())
    }

    /// Schedule a leaf builder. Leaf builders always run before every
    /// composite builder.
    pub fn add_leaf(&mut self, builder: Box<dyn Builder>) -> Result<(), PipelineError> {
        if builder.kind() == BuilderKind::Composite {
            return Err(PipelineError::WrongStage(builder.name()));
        }
        self.check_schedulable(builder.as_ref())?;
        self.leaf.push(builder);
        Ok(())
    }

    /// Schedule a composite builder after everything already scheduled.
    pub fn add_composite(&mut self, builder: Box<dyn Builder>) -> Result<(), PipelineError> {
        self.check_schedulable(builder.as_ref())?;
        self.composite.push(builder);
        Ok(())
    }

    /// Run every scheduled builder once, in order.
    pub fn run(&mut self, graph: &mut ConfigurationGraph) -> Result<BuildReport, PipelineError> {
        if self.state != PipelineState::NotStarted {
            return Err(PipelineError::AlreadyRun(self.state));
        }

        let mut report = BuildReport::default();

        self.state = PipelineState::RunningLeafBuilders;
        if let Err(e) = run_stage(
            "leaf",
            &self.leaf,
            graph,
            self.attributes.as_ref(),
            &mut report,
        ) {
            self.state = failed_state(&e);
            return Err(e);
        }

        self.state = PipelineState::RunningCompositeBuilders;
        if let Err(e) = run_stage(
            "composite",
            &self.composite,
            graph,
            self.attributes.as_ref(),
            &mut report,
        ) {
            self.state = failed_state(&e);
            return Err(e);
        }

        self.state = PipelineState::Done;
        info!(
            builders = report.outcomes.len(),
            committed = report.total_committed(),
            "configuration build complete"
        );
        Ok(report)
    }
}

fn failed_state(error: &PipelineError) -> PipelineState {
    match error {
        PipelineError::Builder { builder, .. } => PipelineState::Failed { builder: *builder },
        _ => PipelineState::Failed { builder: "" },
    }
}

fn run_stage(
    stage: &'static str,
    builders: &[Box<dyn Builder>],
    graph: &mut ConfigurationGraph,
    attributes: &dyn AttributeAssigner,
    report: &mut BuildReport,
) -> Result<(), PipelineError> {
    let _span = info_span!("stage", stage, builders = builders.len()).entered();
    for builder in builders {
        report
            .outcomes
            .push(run_staged(graph, builder.as_ref(), attributes)?);
    }
    Ok(())
}

/// Run one builder in its own staging scope.
///
/// On success the builder's records are committed; on failure they are
/// rolled back and the error is tagged with the builder's name.
pub fn run_staged(
    graph: &mut ConfigurationGraph,
    builder: &dyn Builder,
    attributes: &dyn AttributeAssigner,
) -> Result<BuilderOutcome, PipelineError> {
    let _span = info_span!("builder", name = builder.name()).entered();

    let result = {
        let mut ctx = BuildContext::new(graph, attributes);
        builder.build(&mut ctx)
    };

    match result {
        Ok(()) => {
            let committed = graph.commit_staged();
            debug!(committed, "builder committed");
            Ok(BuilderOutcome {
                builder: builder.name(),
                kind: builder.kind(),
                committed,
            })
        }
        Err(source) => {
            let dropped = graph.rollback_staged();
            tracing::error!(dropped, error = %source, "builder failed, stage discarded");
            Err(PipelineError::Builder {
                builder: builder.name(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{AttributeKind, HasAttributes};
    use crate::id::ItemNumber;
    use crate::item::{ItemDefinition, JewelMix};
    use crate::lookup::{LookupError, NaturalKey, resolve_item};
    use crate::test_utils::{CountingAssigner, FnBuilder, map, monster};

    struct Items;

    impl Builder for Items {
        fn name(&self) -> &'static str {
            "items"
        }

        fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
            for (group, number) in [(14, 13), (12, 30)] {
                let key = ctx.graph.items.insert_new(ItemDefinition {
                    group,
                    number,
                    ..Default::default()
                });
                ctx.graph.items.append(key)?;
            }
            Ok(())
        }
    }

    struct Mix;

    impl Builder for Mix {
        fn name(&self) -> &'static str {
            "mix"
        }

        fn kind(&self) -> BuilderKind {
            BuilderKind::Composite
        }

        fn depends_on(&self) -> &'static [&'static str] {
            &["items"]
        }

        fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
            let single_jewel = resolve_item(ctx.graph, ItemNumber::new(14, 13))?;
            let mixed_jewel = resolve_item(ctx.graph, ItemNumber::new(12, 30))?;
            let key = ctx.graph.jewel_mixes.insert_new(JewelMix {
                number: 0,
                single_jewel,
                mixed_jewel,
            });
            ctx.graph.jewel_mixes.append(key)?;
            Ok(())
        }
    }

    /// Same as `Mix` but without a declared dependency, so it can be
    /// scheduled in the wrong place.
    struct UndeclaredMix;

    impl Builder for UndeclaredMix {
        fn name(&self) -> &'static str {
            "undeclared_mix"
        }

        fn kind(&self) -> BuilderKind {
            BuilderKind::Composite
        }

        fn build(&self, ctx: &mut BuildContext<'_>) -> Result<(), BuildError> {
            Mix.build(ctx)
        }
    }

    #[test]
    fn runs_leaf_then_composite() {
        let mut pipeline = Pipeline::new();
        pipeline.add_leaf(Box::new(Items)).unwrap();
        pipeline.add_composite(Box::new(Mix)).unwrap();
        assert_eq!(pipeline.schedule(), vec!["items", "mix"]);

        let mut graph = ConfigurationGraph::new();
        let report = pipeline.run(&mut graph).unwrap();

        assert_eq!(pipeline.state(), PipelineState::Done);
        assert_eq!(report.committed_by("items"), Some(2));
        assert_eq!(report.committed_by("mix"), Some(1));
        assert_eq!(report.total_committed(), 3);
        assert_eq!(graph.jewel_mixes.len(), 1);
    }

    #[test]
    fn composite_before_dependency_is_rejected() {
        let mut pipeline = Pipeline::new();
        let err = pipeline.add_composite(Box::new(Mix)).unwrap_err();
        assert_eq!(
            err,
            PipelineError::OutOfOrder {
                builder: "mix",
                missing: "items"
            }
        );
    }

    #[test]
    fn composite_in_leaf_stage_is_rejected() {
        let mut pipeline = Pipeline::new();
        pipeline.add_leaf(Box::new(Items)).unwrap();
        assert_eq!(
            pipeline.add_leaf(Box::new(Mix)).unwrap_err(),
            PipelineError::WrongStage("mix")
        );
    }

    #[test]
    fn duplicate_builder_is_rejected() {
        let mut pipeline = Pipeline::new();
        pipeline.add_leaf(Box::new(Items)).unwrap();
        assert_eq!(
            pipeline.add_leaf(Box::new(Items)).unwrap_err(),
            PipelineError::DuplicateBuilder("items")
        );
    }

    #[test]
    fn failing_builder_stops_the_pass() {
        let mut pipeline = Pipeline::new();
        pipeline.add_composite(Box::new(UndeclaredMix)).unwrap();

        let mut graph = ConfigurationGraph::new();
        let err = pipeline.run(&mut graph).unwrap_err();

        assert_eq!(
            err.build_error(),
            Some(&BuildError::Lookup(LookupError::ReferenceNotFound {
                key: NaturalKey::Item(ItemNumber::new(14, 13))
            }))
        );
        assert_eq!(
            pipeline.state(),
            PipelineState::Failed {
                builder: "undeclared_mix"
            }
        );
        assert!(!graph.has_staged());
        assert!(graph.jewel_mixes.is_empty());
        assert!(format!("{err}").contains("undeclared_mix"));
    }

    #[test]
    fn pipeline_runs_once() {
        let mut pipeline = Pipeline::new();
        pipeline.add_leaf(Box::new(Items)).unwrap();
        let mut graph = ConfigurationGraph::new();
        pipeline.run(&mut graph).unwrap();

        assert_eq!(
            pipeline.run(&mut graph).unwrap_err(),
            PipelineError::AlreadyRun(PipelineState::Done)
        );
        assert!(matches!(
            pipeline.add_leaf(Box::new(Mix)),
            Err(PipelineError::WrongStage("mix"))
        ));
        assert_eq!(graph.items.len(), 2);
    }

    #[test]
    fn injected_assigner_receives_every_attribute_map() {
        let counter = CountingAssigner::default();
        let mut pipeline = Pipeline::with_attributes(Box::new(counter.clone()));
        let world = FnBuilder::new("world", |ctx| {
            let lorencia = ctx.graph.maps.insert_new(map(0, "Lorencia"));
            ctx.graph.maps.append(lorencia)?;

            let mut goblin = monster(78, "Golden Goblin");
            ctx.add_attributes(
                &mut goblin,
                &[
                    (AttributeKind::Level, 14.0),
                    (AttributeKind::MaximumHealth, 5000.0),
                ],
            );
            let key = ctx.graph.monsters.insert_new(goblin);
            ctx.graph.monsters.append(key)?;
            Ok(())
        });
        pipeline.add_leaf(Box::new(world)).unwrap();

        let mut graph = ConfigurationGraph::new();
        pipeline.run(&mut graph).unwrap();

        assert_eq!((counter.calls(), counter.pairs()), (1, 2));
        let (_, goblin) = graph.monsters.iter().next().unwrap();
        assert_eq!(goblin.attribute(AttributeKind::MaximumHealth), Some(5000.0));
        assert_eq!(graph.maps.len(), 1);
    }
}
