//! Deferred configuration-property validation.
//!
//! The aggregate validation set moves through two phases: *collecting*
//! (build time, append-only `ValidationSetBuilder`) then *sealed*
//! (runtime init, read-only `SealedValidationSet`). Sealing consumes
//! the builder, so no request can be added afterwards, and the sealed
//! set is handed to the container's start hook exactly once.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};

use confweave_model::{ConfigPropertyRequest, TypeName, TypeShape};

use crate::classify::is_container_shape;
use crate::errors::{BuildError, ConfigValidationError, MissingProperty};
use crate::pipeline::{BuildStage, ItemKind, Phase, PipelineContext};

/// Structural identity of one validation entry. Two requests with the
/// same key, raw type, argument types and default validate once.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ValidationKey {
    pub key: String,
    pub raw_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub argument_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl ValidationKey {
    fn of(request: &ConfigPropertyRequest) -> Self {
        ValidationKey {
            key: request.key.clone(),
            raw_type: request.ty.raw_name(),
            argument_types: request.ty.argument_names(),
            default_value: request.default_value.clone(),
        }
    }

    /// Human-readable type label for reports.
    pub fn type_label(&self) -> String {
        if self.argument_types.is_empty() {
            self.raw_type.clone()
        } else {
            format!("{}<{}>", self.raw_type, self.argument_types.join(", "))
        }
    }
}

/// Append-only collection phase of the validation set.
#[derive(Debug, Default)]
pub struct ValidationSetBuilder {
    entries: BTreeMap<ValidationKey, BTreeSet<String>>,
}

impl ValidationSetBuilder {
    pub fn new() -> Self {
        ValidationSetBuilder::default()
    }

    /// Record one request. Structurally identical requests collapse to
    /// one entry; their requesting sites are aggregated for reporting.
    pub fn record(&mut self, request: &ConfigPropertyRequest) {
        self.entries
            .entry(ValidationKey::of(request))
            .or_default()
            .insert(request.site_label());
    }

    /// Seal the set. Consumes the builder: nothing can be appended
    /// after this point.
    pub fn seal(self) -> SealedValidationSet {
        SealedValidationSet {
            entries: self.entries,
        }
    }
}

/// Read-only, deduplicated validation set handed to the start hook.
#[derive(Debug, Default)]
pub struct SealedValidationSet {
    entries: BTreeMap<ValidationKey, BTreeSet<String>>,
}

impl SealedValidationSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ValidationKey, &BTreeSet<String>)> {
        self.entries.iter()
    }
}

// Artifact form: a key-ordered sequence of entries with their sites.
impl Serialize for SealedValidationSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            #[serde(flatten)]
            key: &'a ValidationKey,
            sites: &'a BTreeSet<String>,
        }
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (key, sites) in &self.entries {
            seq.serialize_element(&Entry { key, sites })?;
        }
        seq.end()
    }
}

/// Live configuration source consulted at process start.
pub trait ConfigSource {
    fn resolve(&self, key: &str) -> Option<String>;
}

impl ConfigSource for BTreeMap<String, String> {
    fn resolve(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// The container's process-start hook. Receives the sealed set exactly
/// once; a `ConfigValidationError` fails process start.
pub trait StartupHook {
    fn validate(&mut self, set: &SealedValidationSet) -> Result<(), ConfigValidationError>;
}

/// Hook used when no live configuration source is attached: records
/// nothing and accepts everything (build-only invocations).
#[derive(Debug, Default)]
pub struct NoopStartupHook;

impl StartupHook for NoopStartupHook {
    fn validate(&mut self, _set: &SealedValidationSet) -> Result<(), ConfigValidationError> {
        Ok(())
    }
}

/// Start hook resolving every no-default entry against a configuration
/// source, reporting all missing keys in one aggregate error.
pub struct PropertySourceHook<S> {
    source: S,
}

impl<S: ConfigSource> PropertySourceHook<S> {
    pub fn new(source: S) -> Self {
        PropertySourceHook { source }
    }
}

impl<S: ConfigSource> StartupHook for PropertySourceHook<S> {
    fn validate(&mut self, set: &SealedValidationSet) -> Result<(), ConfigValidationError> {
        let mut missing = Vec::new();
        for (key, sites) in set.iter() {
            if key.default_value.is_some() {
                continue;
            }
            if self.source.resolve(&key.key).is_none() {
                missing.push(MissingProperty {
                    key: key.key.clone(),
                    ty: key.type_label(),
                    sites: sites.iter().cloned().collect(),
                });
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigValidationError { missing })
        }
    }
}

/// Runtime-init stage: filters container shapes, registers reflective
/// loads, seals the set and hands it to the start hook.
#[derive(Debug, Default)]
pub struct ValidateConfigProperties;

impl BuildStage for ValidateConfigProperties {
    fn name(&self) -> &'static str {
        "validate-config-properties"
    }

    fn phase(&self) -> Phase {
        Phase::RuntimeInit
    }

    fn produces(&self) -> &'static [ItemKind] {
        &[ItemKind::ReflectiveHints, ItemKind::ValidationOutcome]
    }

    fn consumes(&self) -> &'static [ItemKind] {
        &[ItemKind::PropertyRequests]
    }

    fn run(&mut self, ctx: &mut PipelineContext<'_>) -> Result<(), BuildError> {
        let mut builder = ValidationSetBuilder::new();
        for request in &ctx.property_requests {
            // Container objects may legitimately be absent; they never
            // reach presence validation.
            if is_container_shape(&request.ty) {
                continue;
            }

            // Non-primitive raw and argument types are loaded by name
            // at process start.
            if !request.ty.is_primitive() {
                ctx.reflection
                    .register(TypeName::new(request.ty.raw_name()), false, false);
            }
            if let TypeShape::Parameterized { args, .. } = &request.ty {
                for arg in args {
                    if !arg.is_primitive() {
                        ctx.reflection
                            .register(TypeName::new(arg.raw_name()), false, false);
                    }
                }
            }

            builder.record(request);
        }

        let sealed = builder.seal();
        tracing::debug!(entries = sealed.len(), "sealed validation set");
        ctx.startup.validate(&sealed)?;
        ctx.sealed_validation = Some(sealed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(key: &str, ty: &str, default: Option<&str>, site: &str) -> ConfigPropertyRequest {
        ConfigPropertyRequest {
            key: key.to_string(),
            ty: TypeShape::parse(ty).unwrap(),
            default_value: default.map(str::to_string),
            declaring_type: TypeName::new("com.acme.App"),
            member: site.to_string(),
        }
    }

    #[test]
    fn test_structurally_identical_requests_dedup() {
        let mut builder = ValidationSetBuilder::new();
        builder.record(&request("app.retries", "int", None, "retries"));
        builder.record(&request("app.retries", "int", None, "retryCount"));
        let sealed = builder.seal();
        assert_eq!(sealed.len(), 1);
        let (_, sites) = sealed.iter().next().unwrap();
        assert_eq!(sites.len(), 2);
    }

    #[test]
    fn test_different_defaults_do_not_dedup() {
        let mut builder = ValidationSetBuilder::new();
        builder.record(&request("app.retries", "int", None, "retries"));
        builder.record(&request("app.retries", "int", Some("3"), "retries"));
        assert_eq!(builder.seal().len(), 2);
    }

    #[test]
    fn test_hook_reports_all_missing_keys_at_once() {
        let mut builder = ValidationSetBuilder::new();
        builder.record(&request("app.retries", "int", None, "retries"));
        builder.record(&request("app.name", "java.lang.String", None, "name"));
        builder.record(&request("app.timeout", "long", Some("30"), "timeout"));
        let sealed = builder.seal();

        let mut hook = PropertySourceHook::new(BTreeMap::new());
        let err = hook.validate(&sealed).unwrap_err();
        assert_eq!(err.missing.len(), 2);
        let keys: Vec<_> = err.missing.iter().map(|m| m.key.as_str()).collect();
        assert!(keys.contains(&"app.retries"));
        assert!(keys.contains(&"app.name"));
    }

    #[test]
    fn test_hook_accepts_resolved_and_defaulted_keys() {
        let mut builder = ValidationSetBuilder::new();
        builder.record(&request("app.retries", "int", None, "retries"));
        builder.record(&request("app.timeout", "long", Some("30"), "timeout"));
        let sealed = builder.seal();

        let mut source = BTreeMap::new();
        source.insert("app.retries".to_string(), "5".to_string());
        let mut hook = PropertySourceHook::new(source);
        assert!(hook.validate(&sealed).is_ok());
    }

    #[test]
    fn test_type_label_includes_arguments() {
        let key = ValidationKey::of(&request(
            "app.hosts",
            "java.util.List<java.lang.String>",
            None,
            "hosts",
        ));
        assert_eq!(key.type_label(), "java.util.List<java.lang.String>");
    }
}
