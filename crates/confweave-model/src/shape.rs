//! Type-shape model and type string parsing.
//!
//! The pipeline never inspects live types; every requested type is one
//! of a closed set of shapes parsed from the index snapshot. Supports:
//! - primitive types: `boolean`, `byte`, `short`, `int`, `long`,
//!   `char`, `float`, `double`
//! - nominal types: `com.acme.Settings`
//! - parameterized types: `java.util.Map<java.lang.String, com.acme.Endpoint>`
//! - array types: `int[]`, `java.lang.String[][]`

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::name::TypeName;

/// The eight primitive scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "boolean" => Some(PrimitiveKind::Boolean),
            "byte" => Some(PrimitiveKind::Byte),
            "short" => Some(PrimitiveKind::Short),
            "int" => Some(PrimitiveKind::Int),
            "long" => Some(PrimitiveKind::Long),
            "char" => Some(PrimitiveKind::Char),
            "float" => Some(PrimitiveKind::Float),
            "double" => Some(PrimitiveKind::Double),
            _ => None,
        }
    }
}

/// Closed set of type shapes encountered at injection points.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeShape {
    Primitive(PrimitiveKind),
    Class(TypeName),
    Parameterized { raw: TypeName, args: Vec<TypeShape> },
    Array(Box<TypeShape>),
}

impl TypeShape {
    /// Raw erasure name: the nominal name with type arguments dropped.
    /// Arrays report their canonical bracketed form, primitives their
    /// keyword.
    pub fn raw_name(&self) -> String {
        match self {
            TypeShape::Primitive(kind) => kind.as_str().to_string(),
            TypeShape::Class(name) => name.as_str().to_string(),
            TypeShape::Parameterized { raw, .. } => raw.as_str().to_string(),
            TypeShape::Array(element) => format!("{}[]", element.raw_name()),
        }
    }

    /// Type argument raw names, empty for non-parameterized shapes.
    pub fn argument_names(&self) -> Vec<String> {
        match self {
            TypeShape::Parameterized { args, .. } => {
                args.iter().map(|arg| arg.raw_name()).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeShape::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeShape::Array(_))
    }

    /// Parse a type string into a shape.
    ///
    /// Returns `None` for malformed input (unbalanced brackets, empty
    /// segments). Nominal names are not validated beyond being
    /// non-empty and bracket-free.
    pub fn parse(type_str: &str) -> Option<TypeShape> {
        let type_str = type_str.trim();
        if type_str.is_empty() {
            return None;
        }

        // Array types peel from the right: `T[][]` is an array of `T[]`.
        if let Some(element) = type_str.strip_suffix("[]") {
            let element_shape = TypeShape::parse(element)?;
            return Some(TypeShape::Array(Box::new(element_shape)));
        }

        if let Some(kind) = PrimitiveKind::parse(type_str) {
            return Some(TypeShape::Primitive(kind));
        }

        // Parameterized types: raw<args>
        if let Some(angle_pos) = type_str.find('<') {
            let raw = type_str[..angle_pos].trim();
            let args_str = type_str[angle_pos..].trim();
            if raw.is_empty() || !args_str.ends_with('>') {
                return None;
            }
            let args = parse_type_args(args_str)?;
            if args.is_empty() {
                return None;
            }
            return Some(TypeShape::Parameterized {
                raw: TypeName::new(raw),
                args,
            });
        }

        if type_str.contains('>') || type_str.contains(',') {
            return None;
        }

        Some(TypeShape::Class(TypeName::new(type_str)))
    }
}

/// Parse a type-arguments string like `<A, B<C, D>>`, splitting on
/// commas while tracking angle-bracket depth.
fn parse_type_args(args_str: &str) -> Option<Vec<TypeShape>> {
    let inner = args_str.strip_prefix('<')?.strip_suffix('>')?;

    let mut args = Vec::new();
    let mut depth = 0i32;
    let mut current_start = 0;

    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth -= 1,
            ',' if depth == 0 => {
                args.push(TypeShape::parse(&inner[current_start..i])?);
                current_start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }

    // Don't forget the last argument
    let last_arg = inner[current_start..].trim();
    if last_arg.is_empty() {
        return None;
    }
    args.push(TypeShape::parse(last_arg)?);

    Some(args)
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeShape::Primitive(kind) => f.write_str(kind.as_str()),
            TypeShape::Class(name) => f.write_str(name.as_str()),
            TypeShape::Parameterized { raw, args } => {
                write!(f, "{raw}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            TypeShape::Array(element) => write!(f, "{element}[]"),
        }
    }
}

// Shapes travel through snapshots and artifacts in their canonical
// string form.
impl Serialize for TypeShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeShape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TypeShape::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("malformed type string: {raw}")))
    }
}
