//! Shared types for the confweave workspace.
//!
//! This crate provides the foundational data model used across the
//! pipeline crates, breaking circular dependency chains:
//!
//! - [`name::TypeName`] - dotted type identity (`com.acme.Outer.Inner`)
//! - [`shape::TypeShape`] - the closed type-shape enum with its string parser
//! - [`injection`] - injection points, sites, and the configuration qualifier
//! - [`request::ConfigPropertyRequest`] - one discovered property request
//! - [`config_class::ConfigClassDescriptor`] - discovered config-class interfaces
//! - [`registration::SyntheticComponentRegistration`] - container registrations

pub mod config_class;
pub mod injection;
pub mod name;
pub mod names;
pub mod registration;
pub mod request;
pub mod shape;

pub use config_class::{ConfigClassDescriptor, ConfigClassVariant};
pub use injection::{InjectionPoint, InjectionSite, PropertyQualifier};
pub use name::TypeName;
pub use registration::{
    ComponentScope, DiscoveryExclusion, QualifierSpec, SyntheticComponentRegistration,
};
pub use request::ConfigPropertyRequest;
pub use shape::{PrimitiveKind, TypeShape};
