//! Reflection-availability registry.
//!
//! Types resolved by name at process start must be registered so the
//! runtime can load them reflectively. The registry is an explicit
//! write-only sink created at build start and threaded through the
//! pipeline context; there is no ambient global.

use serde::Serialize;
use std::collections::BTreeMap;

use confweave_model::TypeName;

/// One reflection grant for a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReflectiveHint {
    #[serde(rename = "type")]
    pub ty: TypeName,
    pub allow_construction: bool,
    pub allow_field_access: bool,
}

/// Deduplicating reflection sink. Re-registering a type merges its
/// flags, so a type needed for construction by one stage and lookup by
/// another keeps the stronger grant.
#[derive(Debug, Default)]
pub struct ReflectionRegistry {
    entries: BTreeMap<TypeName, (bool, bool)>,
}

impl ReflectionRegistry {
    pub fn new() -> Self {
        ReflectionRegistry::default()
    }

    pub fn register(&mut self, ty: TypeName, allow_construction: bool, allow_field_access: bool) {
        let flags = self.entries.entry(ty).or_insert((false, false));
        flags.0 |= allow_construction;
        flags.1 |= allow_field_access;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drain the registry into its artifact form, name-ordered.
    pub fn into_hints(self) -> Vec<ReflectiveHint> {
        self.entries
            .into_iter()
            .map(|(ty, (allow_construction, allow_field_access))| ReflectiveHint {
                ty,
                allow_construction,
                allow_field_access,
            })
            .collect()
    }
}
