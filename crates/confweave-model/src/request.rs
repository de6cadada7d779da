//! Discovered configuration-property requests.

use serde::{Deserialize, Serialize};

use crate::name::TypeName;
use crate::shape::TypeShape;

/// One configuration-property injection request, derived from an
/// injection point carrying the configuration qualifier.
///
/// The declaring site is carried so start-time resolution failures can
/// point back at the code that asked for the key. Never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigPropertyRequest {
    /// Resolved property key (explicit qualifier name or derived).
    pub key: String,
    /// Requested type, possibly parameterized.
    #[serde(rename = "type")]
    pub ty: TypeShape,
    /// Declared default literal, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Type declaring the injection point.
    pub declaring_type: TypeName,
    /// Member name of the injection site.
    pub member: String,
}

impl ConfigPropertyRequest {
    /// `com.acme.App#retries` style site label for reports.
    pub fn site_label(&self) -> String {
        format!("{}#{}", self.declaring_type, self.member)
    }
}
