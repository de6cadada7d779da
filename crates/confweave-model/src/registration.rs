//! Synthetic component registrations handed to the DI container.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::name::TypeName;

/// Bean lifecycle scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentScope {
    Singleton,
    /// Per-lookup; generated config classes use this so each injection
    /// sees a fresh mapping instance.
    Dependent,
}

/// A qualifier annotation attached to a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifierSpec {
    pub annotation: TypeName,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, String>,
}

impl QualifierSpec {
    /// Marker qualifier with no values.
    pub fn marker(annotation: impl Into<TypeName>) -> Self {
        QualifierSpec {
            annotation: annotation.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(
        annotation: impl Into<TypeName>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.into(), value.into());
        QualifierSpec {
            annotation: annotation.into(),
            values,
        }
    }
}

/// A declarative request to the container to create a component.
///
/// `creator` names the container-side factory that interprets `params`
/// at construction time. `provided_types` is never empty: it always
/// contains at least the requested/declared type. Write-once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticComponentRegistration {
    pub implementation: TypeName,
    pub provided_types: BTreeSet<TypeName>,
    pub scope: ComponentScope,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qualifiers: Vec<QualifierSpec>,
    pub creator: TypeName,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
}

/// Marks a declared type as excluded from automatic bean discovery.
///
/// Raw `@ConfigProperties` interfaces are vetoed so the container never
/// tries to instantiate the interface itself; `unremovable` keeps the
/// synthetic replacement alive through unused-bean removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryExclusion {
    #[serde(rename = "type")]
    pub ty: TypeName,
    pub unremovable: bool,
}
