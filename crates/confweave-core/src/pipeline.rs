//! Producer/consumer build pipeline.
//!
//! Stages declare the data-item kinds they produce and consume; the
//! pipeline computes a topological order over the producer→consumer
//! edges and executes each stage exactly once. All producers of a kind
//! finish before any consumer of that kind starts, so no stage ever
//! observes a partial data item. Runtime-init stages run strictly after
//! every build-time stage. A stage error aborts the whole run; nothing
//! is committed to the container descriptor set.

use serde::Serialize;
use std::collections::BTreeSet;

use confweave_index::ProgramIndex;
use confweave_model::{
    ConfigClassDescriptor, ConfigPropertyRequest, DiscoveryExclusion,
    SyntheticComponentRegistration,
};

use crate::config_classes::{
    ClassEmitter, ExcludeRawConfigInterfaces, GenerateConfigClasses, RegisterConfigClassBeans,
};
use crate::errors::BuildError;
use crate::reflection::{ReflectionRegistry, ReflectiveHint};
use crate::scan::ScanInjectionPoints;
use crate::validation::{SealedValidationSet, StartupHook, ValidateConfigProperties};

/// Closed set of data-item kinds flowing between stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    PropertyRequests,
    ConfigClasses,
    SyntheticRegistrations,
    DiscoveryExclusions,
    ReflectiveHints,
    ValidationOutcome,
}

/// Sub-phase a stage belongs to. Build-time stages produce artifacts;
/// runtime-init stages execute deferred registration and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Build,
    RuntimeInit,
}

/// One pipeline stage with declared inputs and outputs.
pub trait BuildStage {
    fn name(&self) -> &'static str;

    fn phase(&self) -> Phase {
        Phase::Build
    }

    fn produces(&self) -> &'static [ItemKind];

    fn consumes(&self) -> &'static [ItemKind];

    fn run(&mut self, ctx: &mut PipelineContext<'_>) -> Result<(), BuildError>;
}

/// Shared state threaded through the stages: the read-only index, the
/// external collaborators, and one append-only output channel per item
/// kind.
pub struct PipelineContext<'a> {
    pub index: &'a ProgramIndex,
    pub emitter: &'a mut dyn ClassEmitter,
    pub startup: &'a mut dyn StartupHook,
    pub reflection: ReflectionRegistry,
    pub property_requests: Vec<ConfigPropertyRequest>,
    pub config_classes: Vec<ConfigClassDescriptor>,
    pub registrations: Vec<SyntheticComponentRegistration>,
    pub exclusions: Vec<DiscoveryExclusion>,
    pub sealed_validation: Option<SealedValidationSet>,
}

impl<'a> PipelineContext<'a> {
    pub fn new(
        index: &'a ProgramIndex,
        emitter: &'a mut dyn ClassEmitter,
        startup: &'a mut dyn StartupHook,
    ) -> Self {
        PipelineContext {
            index,
            emitter,
            startup,
            reflection: ReflectionRegistry::new(),
            property_requests: Vec::new(),
            config_classes: Vec::new(),
            registrations: Vec::new(),
            exclusions: Vec::new(),
            sealed_validation: None,
        }
    }

    /// Tear the context down into the serialized artifact set.
    pub fn into_artifacts(self) -> BuildArtifacts {
        BuildArtifacts {
            registrations: self.registrations,
            discovery_exclusions: self.exclusions,
            config_classes: self.config_classes,
            property_requests: self.property_requests,
            reflective_types: self.reflection.into_hints(),
            validation: self.sealed_validation.unwrap_or_default(),
        }
    }
}

/// Everything one build pass hands to the container.
#[derive(Debug, Serialize)]
pub struct BuildArtifacts {
    pub registrations: Vec<SyntheticComponentRegistration>,
    pub discovery_exclusions: Vec<DiscoveryExclusion>,
    pub config_classes: Vec<ConfigClassDescriptor>,
    pub property_requests: Vec<ConfigPropertyRequest>,
    pub reflective_types: Vec<ReflectiveHint>,
    pub validation: SealedValidationSet,
}

/// DAG scheduler over registered stages.
#[derive(Default)]
pub struct BuildPipeline {
    stages: Vec<Box<dyn BuildStage>>,
}

impl BuildPipeline {
    pub fn new() -> Self {
        BuildPipeline { stages: Vec::new() }
    }

    /// The standard stage set implementing the full config pass.
    pub fn standard() -> Self {
        let mut pipeline = BuildPipeline::new();
        pipeline
            .register(Box::new(ScanInjectionPoints))
            .register(Box::new(GenerateConfigClasses))
            .register(Box::new(RegisterConfigClassBeans))
            .register(Box::new(ExcludeRawConfigInterfaces))
            .register(Box::new(ValidateConfigProperties));
        pipeline
    }

    pub fn register(&mut self, stage: Box<dyn BuildStage>) -> &mut Self {
        self.stages.push(stage);
        self
    }

    /// Execute every stage once, in an order consistent with the
    /// declared producer→consumer DAG, build phase before runtime-init.
    pub fn run(&mut self, ctx: &mut PipelineContext<'_>) -> Result<(), BuildError> {
        let order = self.schedule()?;
        for idx in order {
            let stage = &mut self.stages[idx];
            tracing::debug!(stage = stage.name(), "executing pipeline stage");
            stage.run(ctx)?;
        }
        Ok(())
    }

    /// Kahn's algorithm, stable with respect to registration order.
    ///
    /// Edges: every producer of a kind precedes every consumer of that
    /// kind, and every build stage precedes every runtime-init stage.
    /// A runtime-init stage feeding a build stage therefore shows up as
    /// a cycle.
    fn schedule(&self) -> Result<Vec<usize>, BuildError> {
        let n = self.stages.len();
        let mut successors: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];

        for (p, producer) in self.stages.iter().enumerate() {
            for (c, consumer) in self.stages.iter().enumerate() {
                if p == c {
                    continue;
                }
                let feeds = producer
                    .produces()
                    .iter()
                    .any(|kind| consumer.consumes().contains(kind));
                let phase_ordered = producer.phase() == Phase::Build
                    && consumer.phase() == Phase::RuntimeInit;
                if feeds || phase_ordered {
                    successors[p].insert(c);
                }
            }
        }

        let mut indegree = vec![0usize; n];
        for succ in &successors {
            for &c in succ {
                indegree[c] += 1;
            }
        }

        let mut ready: BTreeSet<usize> = (0..n).filter(|&i| indegree[i] == 0).collect();
        let mut order = Vec::with_capacity(n);
        while let Some(&next) = ready.iter().next() {
            ready.remove(&next);
            order.push(next);
            for &c in &successors[next] {
                indegree[c] -= 1;
                if indegree[c] == 0 {
                    ready.insert(c);
                }
            }
        }

        if order.len() != n {
            let scheduled: BTreeSet<usize> = order.iter().copied().collect();
            let unscheduled = (0..n)
                .filter(|i| !scheduled.contains(i))
                .map(|i| self.stages[i].name())
                .collect();
            return Err(BuildError::StageCycle { unscheduled });
        }
        Ok(order)
    }
}

/// Run one full build pass over `index` with the given collaborators.
pub fn run_build(
    index: &ProgramIndex,
    emitter: &mut dyn ClassEmitter,
    startup: &mut dyn StartupHook,
) -> Result<BuildArtifacts, BuildError> {
    let mut ctx = PipelineContext::new(index, emitter, startup);
    BuildPipeline::standard().run(&mut ctx)?;
    Ok(ctx.into_artifacts())
}
