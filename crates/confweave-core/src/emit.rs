//! Synthetic component emission.
//!
//! Builds the declarative registrations the container consumes at
//! start: one per requested type needing a custom component, one per
//! config-class descriptor with a generated implementation.

use std::collections::{BTreeMap, BTreeSet};

use confweave_model::names;
use confweave_model::{
    ComponentScope, ConfigClassDescriptor, QualifierSpec, SyntheticComponentRegistration,
    TypeName, TypeShape,
};

/// Registration for a single config-value bean of a custom type.
///
/// The advertised type is the raw erasure of the requested shape.
/// Arrays have no nominal class of their own, so the generic fallback
/// creator doubles as their implementation identity. The raw type name
/// travels as the `requiredType` parameter for the container's generic
/// factory; type arguments are resolved by the factory at lookup time.
pub fn config_value_registration(shape: &TypeShape) -> SyntheticComponentRegistration {
    let raw = TypeName::new(shape.raw_name());
    let implementation = if shape.is_array() {
        TypeName::new(names::CONFIG_VALUE_CREATOR)
    } else {
        raw.clone()
    };

    let mut params = BTreeMap::new();
    params.insert("requiredType".to_string(), shape.raw_name());

    SyntheticComponentRegistration {
        implementation,
        provided_types: BTreeSet::from([raw]),
        scope: ComponentScope::Singleton,
        qualifiers: vec![QualifierSpec::marker(names::CONFIG_PROPERTY)],
        creator: TypeName::new(names::CONFIG_VALUE_CREATOR),
        params,
    }
}

/// Registration for a generated config-class implementation.
///
/// `provided_types` is the collected interface hierarchy of the target
/// interface. Only the properties variant carries the qualifier with
/// its prefix; the mapping variant is injected unqualified.
pub fn config_class_registration(
    descriptor: &ConfigClassDescriptor,
    generated: TypeName,
    provided_types: BTreeSet<TypeName>,
) -> SyntheticComponentRegistration {
    let qualifiers = if descriptor.is_properties() {
        vec![QualifierSpec::with_value(
            names::CONFIG_PROPERTIES,
            "prefix",
            descriptor.prefix.clone(),
        )]
    } else {
        Vec::new()
    };

    let mut params = BTreeMap::new();
    params.insert("type".to_string(), descriptor.interface.to_string());
    params.insert("prefix".to_string(), descriptor.prefix.clone());

    SyntheticComponentRegistration {
        implementation: generated,
        provided_types,
        scope: ComponentScope::Dependent,
        qualifiers,
        creator: TypeName::new(names::CONFIG_MAPPING_CREATOR),
        params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confweave_model::ConfigClassVariant;

    #[test]
    fn test_config_value_registration_for_nominal_type() {
        let shape = TypeShape::parse("com.acme.Endpoint").unwrap();
        let reg = config_value_registration(&shape);
        assert_eq!(reg.implementation.as_str(), "com.acme.Endpoint");
        assert!(reg.provided_types.contains(&TypeName::new("com.acme.Endpoint")));
        assert_eq!(reg.params["requiredType"], "com.acme.Endpoint");
        assert_eq!(reg.qualifiers[0].annotation.as_str(), names::CONFIG_PROPERTY);
    }

    #[test]
    fn test_required_type_is_raw_erasure_for_parameterized_types() {
        let shape = TypeShape::parse("com.acme.Box<java.lang.String>").unwrap();
        let reg = config_value_registration(&shape);
        assert_eq!(reg.implementation.as_str(), "com.acme.Box");
        assert_eq!(reg.params["requiredType"], "com.acme.Box");
    }

    #[test]
    fn test_array_uses_fallback_creator_identity() {
        let shape = TypeShape::parse("java.lang.String[]").unwrap();
        let reg = config_value_registration(&shape);
        assert_eq!(reg.implementation.as_str(), names::CONFIG_VALUE_CREATOR);
        assert!(reg
            .provided_types
            .contains(&TypeName::new("java.lang.String[]")));
        assert_eq!(reg.params["requiredType"], "java.lang.String[]");
    }

    #[test]
    fn test_properties_variant_carries_prefixed_qualifier() {
        let descriptor = ConfigClassDescriptor::new(
            TypeName::new("com.acme.Prefs"),
            "prefs",
            ConfigClassVariant::Properties,
        );
        let reg = config_class_registration(
            &descriptor,
            TypeName::new("com.acme.Prefs__ConfigImpl"),
            BTreeSet::from([TypeName::new("com.acme.Prefs")]),
        );
        assert_eq!(reg.scope, ComponentScope::Dependent);
        assert_eq!(reg.qualifiers.len(), 1);
        assert_eq!(reg.qualifiers[0].values["prefix"], "prefs");
        assert_eq!(reg.params["prefix"], "prefs");
    }

    #[test]
    fn test_mapping_variant_is_unqualified() {
        let descriptor = ConfigClassDescriptor::new(
            TypeName::new("com.acme.Prefs"),
            "",
            ConfigClassVariant::Mapping,
        );
        let reg = config_class_registration(
            &descriptor,
            TypeName::new("com.acme.Prefs__ConfigImpl"),
            BTreeSet::from([TypeName::new("com.acme.Prefs")]),
        );
        assert!(reg.qualifiers.is_empty());
    }
}
