//! Build-time configuration-injection pipeline.
//!
//! Resolves externally-configured-value injection requests inside a
//! declared component graph, validates them, and emits synthetic
//! component registrations plus generated-class descriptors for the
//! DI container:
//!
//! - [`scan`] - walks injection points and derives property requests
//! - [`classify`] - decides which requested types need synthetic components
//! - [`property_name`] - canonical key derivation for unnamed requests
//! - [`config_classes`] - config-interface discovery and code generation
//! - [`emit`] - synthetic registration construction
//! - [`validation`] - two-phase (build/start) property validation
//! - [`pipeline`] - the producer/consumer DAG scheduler tying it together

pub mod classify;
pub mod config_classes;
pub mod emit;
pub mod errors;
pub mod pipeline;
pub mod property_name;
pub mod reflection;
pub mod scan;
pub mod validation;

pub use config_classes::{ClassEmitter, DefaultClassEmitter};
pub use errors::{BuildError, ConfigValidationError, MissingProperty};
pub use pipeline::{run_build, BuildArtifacts, BuildPipeline, BuildStage, ItemKind, Phase,
    PipelineContext};
pub use reflection::{ReflectionRegistry, ReflectiveHint};
pub use validation::{
    ConfigSource, NoopStartupHook, PropertySourceHook, SealedValidationSet, StartupHook,
    ValidationSetBuilder,
};
