//! Well-known type and annotation names.
//!
//! The classifier and the scanner match against a closed list of names;
//! keeping them here eliminates scattered string literals throughout
//! the pipeline. The container-shape exemption list is intentionally
//! closed: new container-like shapes require an explicit addition.

/// `java.lang.String`.
pub const STRING: &str = "java.lang.String";

// Boxed scalar wrappers handled by the generic producer.
pub const BOXED_BOOLEAN: &str = "java.lang.Boolean";
pub const BOXED_BYTE: &str = "java.lang.Byte";
pub const BOXED_CHARACTER: &str = "java.lang.Character";
pub const BOXED_DOUBLE: &str = "java.lang.Double";
pub const BOXED_FLOAT: &str = "java.lang.Float";
pub const BOXED_INTEGER: &str = "java.lang.Integer";
pub const BOXED_LONG: &str = "java.lang.Long";
pub const BOXED_SHORT: &str = "java.lang.Short";

// Collection containers handled by the generic producer.
pub const LIST: &str = "java.util.List";
pub const MAP: &str = "java.util.Map";
pub const SET: &str = "java.util.Set";

// Optional wrappers: handled by the generic producer and exempt from
// presence validation.
pub const OPTIONAL: &str = "java.util.Optional";
pub const OPTIONAL_DOUBLE: &str = "java.util.OptionalDouble";
pub const OPTIONAL_INT: &str = "java.util.OptionalInt";
pub const OPTIONAL_LONG: &str = "java.util.OptionalLong";

// Deferred-lookup wrappers: exempt from presence validation.
pub const PROVIDER: &str = "jakarta.inject.Provider";
pub const SUPPLIER: &str = "java.util.function.Supplier";

// Raw configuration-value types: exempt from presence validation.
pub const MP_CONFIG_VALUE: &str = "org.eclipse.microprofile.config.ConfigValue";
pub const SR_CONFIG_VALUE: &str = "io.smallrye.config.ConfigValue";

/// Qualifier marking an injection point as configuration-sourced.
pub const CONFIG_PROPERTY: &str = "org.eclipse.microprofile.config.inject.ConfigProperty";

/// Annotation marking a loosely-validated configuration-properties interface.
pub const CONFIG_PROPERTIES: &str = "org.eclipse.microprofile.config.inject.ConfigProperties";

/// Annotation marking a strict configuration-mapping interface.
pub const CONFIG_MAPPING: &str = "io.smallrye.config.ConfigMapping";

/// Sentinel default literal meaning "declared but unconfigured".
pub const UNCONFIGURED_VALUE: &str =
    "org.eclipse.microprofile.config.configproperty.unconfiguredvalue";

/// Generic runtime factory that materializes a single config value bean.
/// Also serves as the fallback implementation identity for array-typed
/// requests, which have no nominal class of their own.
pub const CONFIG_VALUE_CREATOR: &str = "confweave.runtime.ConfigValueBeanCreator";

/// Runtime factory that materializes generated config-class implementations.
pub const CONFIG_MAPPING_CREATOR: &str = "confweave.runtime.ConfigMappingCreator";
