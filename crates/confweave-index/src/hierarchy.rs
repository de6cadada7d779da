//! Recursive type-hierarchy collection.
//!
//! A generated configuration-mapping implementation must be assignable
//! to every interface its target interface transitively extends, so
//! the emitter advertises the full collected set.

use std::collections::BTreeSet;

use confweave_model::TypeName;

use crate::index::ProgramIndex;

/// Collect `start` plus every interface it transitively extends.
///
/// Depth-first over declared super-interfaces with a visited set, so
/// cycles and diamonds terminate with each identity visited once.
/// Names with no resolvable declaration are skipped: a partial
/// hierarchy is acceptable, the omitted interface simply is not
/// advertised.
pub fn collect_provided_types(index: &ProgramIndex, start: &TypeName) -> BTreeSet<TypeName> {
    let mut collected = BTreeSet::new();
    collected.insert(start.clone());

    let mut stack: Vec<TypeName> = index.resolve_interfaces(start).to_vec();
    while let Some(current) = stack.pop() {
        if index.lookup(&current).is_none() {
            continue;
        }
        if !collected.insert(current.clone()) {
            continue;
        }
        stack.extend(index.resolve_interfaces(&current).iter().cloned());
    }

    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{Declaration, DeclarationKind};

    fn interface(name: &str, interfaces: &[&str]) -> Declaration {
        Declaration {
            name: TypeName::new(name),
            kind: DeclarationKind::Interface,
            enclosing: None,
            interfaces: interfaces.iter().map(|i| TypeName::new(*i)).collect(),
            annotations: Vec::new(),
            members: Vec::new(),
        }
    }

    fn index_of(declarations: Vec<Declaration>) -> ProgramIndex {
        let mut index = ProgramIndex::new();
        for decl in declarations {
            index.add_declaration(decl);
        }
        index
    }

    #[test]
    fn test_no_interfaces_yields_singleton() {
        let index = index_of(vec![interface("com.acme.Prefs", &[])]);
        let collected = collect_provided_types(&index, &TypeName::new("com.acme.Prefs"));
        assert_eq!(collected, BTreeSet::from([TypeName::new("com.acme.Prefs")]));
    }

    #[test]
    fn test_transitive_extends() {
        let index = index_of(vec![
            interface("com.acme.Prefs", &[]),
            interface("com.acme.Prefs.Advanced", &["com.acme.Prefs"]),
        ]);
        let collected =
            collect_provided_types(&index, &TypeName::new("com.acme.Prefs.Advanced"));
        assert_eq!(
            collected,
            BTreeSet::from([
                TypeName::new("com.acme.Prefs"),
                TypeName::new("com.acme.Prefs.Advanced"),
            ])
        );
    }

    #[test]
    fn test_diamond_visits_each_once() {
        let index = index_of(vec![
            interface("a.Top", &[]),
            interface("a.Left", &["a.Top"]),
            interface("a.Right", &["a.Top"]),
            interface("a.Bottom", &["a.Left", "a.Right"]),
        ]);
        let collected = collect_provided_types(&index, &TypeName::new("a.Bottom"));
        assert_eq!(collected.len(), 4);
    }

    #[test]
    fn test_cycle_terminates() {
        let index = index_of(vec![
            interface("a.First", &["a.Second"]),
            interface("a.Second", &["a.First"]),
        ]);
        let collected = collect_provided_types(&index, &TypeName::new("a.First"));
        assert_eq!(
            collected,
            BTreeSet::from([TypeName::new("a.First"), TypeName::new("a.Second")])
        );
    }

    #[test]
    fn test_unresolved_interface_skipped() {
        let index = index_of(vec![interface(
            "a.Leaf",
            &["a.Missing", "a.Known"],
        ), interface("a.Known", &[])]);
        let collected = collect_provided_types(&index, &TypeName::new("a.Leaf"));
        assert_eq!(
            collected,
            BTreeSet::from([TypeName::new("a.Leaf"), TypeName::new("a.Known")])
        );
    }
}
