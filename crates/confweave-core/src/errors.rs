//! Structured error types for the build pipeline.
//!
//! Build-time structural errors abort the run immediately with full
//! declaring-site context. Configuration-resolution errors are deferred
//! and reported once, in aggregate, at process start, so a user sees
//! every missing key in one report.

use serde::Serialize;
use std::fmt;

use confweave_model::{InjectionSite, TypeName};

/// Fatal pipeline error. Nothing is committed to the container
/// descriptor set when a stage fails.
#[derive(Debug, Clone)]
pub enum BuildError {
    /// An injection point needed a derived key but carries no usable
    /// member name.
    MalformedInjectionPoint {
        declaring_type: TypeName,
        site: InjectionSite,
    },

    /// The declared producer/consumer edges do not form a DAG.
    StageCycle {
        /// Stages left unscheduled when progress stopped.
        unscheduled: Vec<&'static str>,
    },

    /// The process-start validation hook rejected the sealed set.
    Validation(ConfigValidationError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MalformedInjectionPoint {
                declaring_type,
                site,
            } => write!(
                f,
                "malformed injection point in {declaring_type}: cannot derive a property key for {site}"
            ),
            BuildError::StageCycle { unscheduled } => write!(
                f,
                "pipeline stages form a dependency cycle: {}",
                unscheduled.join(", ")
            ),
            BuildError::Validation(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<ConfigValidationError> for BuildError {
    fn from(err: ConfigValidationError) -> Self {
        BuildError::Validation(err)
    }
}

/// One unresolvable required property, with the sites that asked for it.
#[derive(Debug, Clone, Serialize)]
pub struct MissingProperty {
    pub key: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub sites: Vec<String>,
}

/// Aggregate process-start configuration failure: every required key
/// that has no default and resolved to nothing, in one report.
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub missing: Vec<MissingProperty>,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} required configuration propert{} could not be resolved:",
            self.missing.len(),
            if self.missing.len() == 1 { "y" } else { "ies" }
        )?;
        for entry in &self.missing {
            write!(f, "  - {} ({})", entry.key, entry.ty)?;
            if !entry.sites.is_empty() {
                write!(f, " requested at {}", entry.sites.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_injection_point_names_site() {
        let err = BuildError::MalformedInjectionPoint {
            declaring_type: TypeName::new("com.acme.App"),
            site: InjectionSite::Field {
                name: String::new(),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("com.acme.App"));
        assert!(msg.contains("field"));
    }

    #[test]
    fn test_validation_error_lists_every_key() {
        let err = ConfigValidationError {
            missing: vec![
                MissingProperty {
                    key: "app.retries".to_string(),
                    ty: "int".to_string(),
                    sites: vec!["com.acme.App#retries".to_string()],
                },
                MissingProperty {
                    key: "app.timeout".to_string(),
                    ty: "long".to_string(),
                    sites: Vec::new(),
                },
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("2 required configuration properties"));
        assert!(msg.contains("app.retries (int) requested at com.acme.App#retries"));
        assert!(msg.contains("app.timeout (long)"));
    }
}
