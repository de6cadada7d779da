//! Injection points and the configuration qualifier.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::name::TypeName;
use crate::shape::TypeShape;

/// Where a dependency is declared: a field or a method/constructor
/// parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectionSite {
    Field {
        name: String,
    },
    Parameter {
        method: String,
        name: String,
        position: usize,
    },
}

impl InjectionSite {
    /// Syntactic member name used for property-key derivation.
    pub fn member_name(&self) -> &str {
        match self {
            InjectionSite::Field { name } => name,
            InjectionSite::Parameter { name, .. } => name,
        }
    }
}

impl fmt::Display for InjectionSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectionSite::Field { name } => write!(f, "field {name}"),
            InjectionSite::Parameter {
                method,
                name,
                position,
            } => write!(f, "parameter {name} (#{position} of {method})"),
        }
    }
}

/// The configuration qualifier attached to an injection point.
///
/// `name` is the explicit property key; when absent the key is derived
/// from the site. `default_value` is the declared default literal,
/// recorded verbatim (empty-string semantics are resolved by the
/// scanner, not here).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyQualifier {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub default_value: Option<String>,
}

/// A declared dependency site in the resolved bean graph.
///
/// `qualifier` is `None` for points with a defaulted qualifier, i.e.
/// ordinary bean dependencies that are not configuration requests.
/// Immutable once indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectionPoint {
    pub declaring_type: TypeName,
    pub site: InjectionSite,
    #[serde(rename = "type")]
    pub ty: TypeShape,
    #[serde(default)]
    pub qualifier: Option<PropertyQualifier>,
}
