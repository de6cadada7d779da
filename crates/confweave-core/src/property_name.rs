//! Canonical property-key derivation.

use confweave_index::ProgramIndex;
use confweave_model::TypeName;

/// Derive the dotted property key for a member with no explicit key.
///
/// Top-level declaring type: `<declaring-type>.<member>`. Nested
/// declaring type: `<enclosing-type>.<simple-nested-name>.<member>`.
/// Pure and referentially stable: the same (member, type) pair always
/// yields the same key, which is later used verbatim as the lookup key
/// at process start. A declaring type missing from the index falls
/// back to the top-level form.
pub fn derive_property_key(member: &str, declaring: &TypeName, index: &ProgramIndex) -> String {
    match index.lookup(declaring) {
        Some(decl) => match &decl.enclosing {
            Some(enclosing) => format!("{}.{}.{}", enclosing, decl.simple_name(), member),
            None => format!("{}.{}", decl.name, member),
        },
        None => format!("{declaring}.{member}"),
    }
}
