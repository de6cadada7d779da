//! Configuration-class descriptors.

use serde::{Deserialize, Serialize};

use crate::name::TypeName;

/// Which configuration-class annotation a discovered interface carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigClassVariant {
    /// Strict mapping: every method must bind to a key.
    Mapping,
    /// Loosely-validated properties: unbound members are tolerated.
    Properties,
}

/// A discovered interface-shaped configuration class.
///
/// `generated` stays empty until the class emitter runs; it is
/// zero-or-one per descriptor (zero when the interface has nothing to
/// bind, in which case the descriptor is excluded from component
/// emission).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigClassDescriptor {
    pub interface: TypeName,
    /// Key prefix; empty means keys resolve unprefixed.
    #[serde(default)]
    pub prefix: String,
    pub variant: ConfigClassVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<TypeName>,
}

impl ConfigClassDescriptor {
    pub fn new(interface: TypeName, prefix: impl Into<String>, variant: ConfigClassVariant) -> Self {
        ConfigClassDescriptor {
            interface,
            prefix: prefix.into(),
            variant,
            generated: None,
        }
    }

    pub fn is_properties(&self) -> bool {
        self.variant == ConfigClassVariant::Properties
    }
}
