//! Program-structure index for the confweave pipeline.
//!
//! The index is a pre-loaded, read-only snapshot of the declared
//! classes, interfaces, annotations and injection points of the
//! application under analysis. It is deserialized once from JSON at
//! build start; no stage ever writes to it.

pub mod hierarchy;
pub mod index;

pub use hierarchy::collect_provided_types;
pub use index::{AnnotationInstance, Declaration, DeclarationKind, ProgramIndex};
