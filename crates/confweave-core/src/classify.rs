//! Requested-type classification.
//!
//! Decides whether a requested type is natively satisfiable by the
//! container's generic config producer or needs a synthetic per-type
//! component, and whether it is a container shape exempt from presence
//! validation. Both checks are pure, total over all shapes, and match
//! against closed name lists.

use confweave_model::names;
use confweave_model::TypeShape;

/// Nominal types the generic producer satisfies directly.
const PRODUCER_HANDLED: &[&str] = &[
    names::STRING,
    names::OPTIONAL,
    names::OPTIONAL_INT,
    names::OPTIONAL_LONG,
    names::OPTIONAL_DOUBLE,
    names::MAP,
    names::SET,
    names::LIST,
    names::BOXED_LONG,
    names::BOXED_FLOAT,
    names::BOXED_INTEGER,
    names::BOXED_BOOLEAN,
    names::BOXED_DOUBLE,
    names::BOXED_SHORT,
    names::BOXED_BYTE,
    names::BOXED_CHARACTER,
    names::SUPPLIER,
    names::PROVIDER,
    names::SR_CONFIG_VALUE,
    names::MP_CONFIG_VALUE,
];

/// Container shapes that may legitimately be absent at process start.
/// Closed by design; container-likeness is never inferred structurally.
const CONTAINER_SHAPES: &[&str] = &[
    names::OPTIONAL,
    names::OPTIONAL_INT,
    names::OPTIONAL_LONG,
    names::OPTIONAL_DOUBLE,
    names::PROVIDER,
    names::SUPPLIER,
    names::SR_CONFIG_VALUE,
    names::MP_CONFIG_VALUE,
];

/// Whether the generic config producer can satisfy `shape` without a
/// synthetic component. Arrays always need the dedicated fallback
/// creator; unknown nominal types need a generated or custom per-type
/// component.
pub fn handled_by_producers(shape: &TypeShape) -> bool {
    match shape {
        TypeShape::Array(_) => false,
        TypeShape::Primitive(_) => true,
        TypeShape::Class(name) | TypeShape::Parameterized { raw: name, .. } => {
            PRODUCER_HANDLED.contains(&name.as_str())
        }
    }
}

/// Whether `shape` is exempt from presence validation.
pub fn is_container_shape(shape: &TypeShape) -> bool {
    match shape {
        TypeShape::Class(name) | TypeShape::Parameterized { raw: name, .. } => {
            CONTAINER_SHAPES.contains(&name.as_str())
        }
        TypeShape::Primitive(_) | TypeShape::Array(_) => false,
    }
}
