//! confweave: build-time configuration-injection analysis.
//!
//! Resolves externally-configured-value injection requests in a
//! declared component graph and emits synthetic component descriptors
//! for a DI container:
//!
//! - **Scanning**: every injection point with a configuration qualifier
//!   becomes a typed property request
//! - **Code generation**: config-mapping/config-properties interfaces
//!   get generated implementations registered against their full
//!   interface hierarchy
//! - **Validation**: required keys are checked once, in aggregate, at
//!   process start
//!
//! See [`confweave_core::pipeline`] for the stage scheduler and
//! [`runner`] for the CLI entry point.

pub mod args;
pub mod properties;
pub mod runner;

pub use confweave_core::{run_build, BuildArtifacts, BuildError, ConfigValidationError};
pub use confweave_index::ProgramIndex;
