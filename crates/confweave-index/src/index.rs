//! The program-structure index snapshot.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use confweave_model::{InjectionPoint, TypeName};

/// Kind of an indexed declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Class,
    Interface,
}

/// An annotation instance attached to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationInstance {
    pub name: TypeName,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, String>,
}

impl AnnotationInstance {
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// One indexed class or interface declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: TypeName,
    pub kind: DeclarationKind,
    /// Enclosing type for nested declarations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosing: Option<TypeName>,
    /// Directly declared super-interfaces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationInstance>,
    /// Abstract member names; the class emitter skips interfaces with
    /// nothing to bind.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
}

impl Declaration {
    pub fn annotation(&self, name: &str) -> Option<&AnnotationInstance> {
        self.annotations.iter().find(|a| a.name.as_str() == name)
    }

    /// Simple name within the enclosing type, e.g. `Inner` for
    /// `com.acme.Outer.Inner`.
    pub fn simple_name(&self) -> &str {
        match &self.enclosing {
            Some(enclosing) => self
                .name
                .as_str()
                .strip_prefix(enclosing.as_str())
                .map(|rest| rest.trim_start_matches('.'))
                .filter(|rest| !rest.is_empty())
                .unwrap_or_else(|| self.name.simple_name()),
            None => self.name.simple_name(),
        }
    }
}

/// Read-only snapshot of the program structure.
///
/// Declarations are keyed by name; the injection points of the
/// resolved bean graph travel in the same snapshot so a single file
/// describes one build input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "ProgramSnapshot", into = "ProgramSnapshot")]
pub struct ProgramIndex {
    declarations: BTreeMap<TypeName, Declaration>,
    injection_points: Vec<InjectionPoint>,
}

/// On-disk snapshot form: declaration list instead of a name-keyed map.
#[derive(Serialize, Deserialize)]
struct ProgramSnapshot {
    #[serde(default)]
    declarations: Vec<Declaration>,
    #[serde(default)]
    injection_points: Vec<InjectionPoint>,
}

impl From<ProgramSnapshot> for ProgramIndex {
    fn from(snapshot: ProgramSnapshot) -> Self {
        let mut index = ProgramIndex::new();
        for declaration in snapshot.declarations {
            index.add_declaration(declaration);
        }
        index.injection_points = snapshot.injection_points;
        index
    }
}

impl From<ProgramIndex> for ProgramSnapshot {
    fn from(index: ProgramIndex) -> Self {
        ProgramSnapshot {
            declarations: index.declarations.into_values().collect(),
            injection_points: index.injection_points,
        }
    }
}

impl ProgramIndex {
    pub fn new() -> Self {
        ProgramIndex::default()
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read index snapshot {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parse index snapshot {}", path.display()))
    }

    /// Add a declaration (snapshot construction / tests).
    pub fn add_declaration(&mut self, declaration: Declaration) {
        self.declarations.insert(declaration.name.clone(), declaration);
    }

    /// Add an injection point (snapshot construction / tests).
    pub fn add_injection_point(&mut self, point: InjectionPoint) {
        self.injection_points.push(point);
    }

    pub fn lookup(&self, name: &TypeName) -> Option<&Declaration> {
        self.declarations.get(name)
    }

    /// Directly declared super-interfaces of `name`; empty when the
    /// declaration is unknown.
    pub fn resolve_interfaces(&self, name: &TypeName) -> &[TypeName] {
        self.declarations
            .get(name)
            .map(|d| d.interfaces.as_slice())
            .unwrap_or(&[])
    }

    /// All declarations of `kind` carrying the annotation `annotation`,
    /// in name order.
    pub fn find_annotated(
        &self,
        kind: DeclarationKind,
        annotation: &str,
    ) -> impl Iterator<Item = &Declaration> {
        let annotation = annotation.to_string();
        self.declarations
            .values()
            .filter(move |d| d.kind == kind && d.annotation(&annotation).is_some())
    }

    /// All injection points of the resolved bean graph.
    pub fn injection_points(&self) -> &[InjectionPoint] {
        &self.injection_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_lookup_and_resolve_interfaces() {
        let mut index = ProgramIndex::new();
        index.add_declaration(interface("com.acme.Prefs", &[]));
        index.add_declaration(interface("com.acme.Prefs.Advanced", &["com.acme.Prefs"]));

        let advanced = TypeName::new("com.acme.Prefs.Advanced");
        assert!(index.lookup(&advanced).is_some());
        assert_eq!(
            index.resolve_interfaces(&advanced),
            &[TypeName::new("com.acme.Prefs")]
        );
        assert!(index
            .resolve_interfaces(&TypeName::new("com.acme.Unknown"))
            .is_empty());
    }

    #[test]
    fn test_find_annotated_filters_kind_and_annotation() {
        let mut index = ProgramIndex::new();
        let mut annotated = interface("com.acme.Prefs", &[]);
        annotated.annotations.push(AnnotationInstance {
            name: TypeName::new("io.smallrye.config.ConfigMapping"),
            values: BTreeMap::new(),
        });
        index.add_declaration(annotated);
        index.add_declaration(interface("com.acme.Other", &[]));

        let found: Vec<_> = index
            .find_annotated(DeclarationKind::Interface, "io.smallrye.config.ConfigMapping")
            .collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name.as_str(), "com.acme.Prefs");
        assert_eq!(
            index
                .find_annotated(DeclarationKind::Class, "io.smallrye.config.ConfigMapping")
                .count(),
            0
        );
    }

    #[test]
    fn test_simple_name_of_nested_declaration() {
        let decl = Declaration {
            name: TypeName::new("com.acme.Outer.Inner"),
            kind: DeclarationKind::Class,
            enclosing: Some(TypeName::new("com.acme.Outer")),
            interfaces: Vec::new(),
            annotations: Vec::new(),
            members: Vec::new(),
        };
        assert_eq!(decl.simple_name(), "Inner");
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut index = ProgramIndex::new();
        index.add_declaration(interface("com.acme.Prefs", &[]));
        let json = serde_json::to_string(&index).unwrap();
        let back: ProgramIndex = serde_json::from_str(&json).unwrap();
        assert!(back.lookup(&TypeName::new("com.acme.Prefs")).is_some());
    }
}
