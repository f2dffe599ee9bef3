//! The inspectable declaration unit consumed by discovery.
//!
//! A `TypeInfo` is a read-only snapshot of one declared type: its flags,
//! the markers and methods declared directly at its level, and a
//! pre-computed ancestor chain, nearest first. Ancestors are shared
//! (`Arc`) between derived types and are never owned by a built node.

use std::sync::Arc;

use crate::metadata::{FixtureMarker, MethodInfo, TypeMarker};

#[derive(Debug)]
pub struct TypeInfo {
    name: String,
    is_abstract: bool,
    is_sealed: bool,
    type_params: Vec<String>,
    markers: Vec<TypeMarker>,
    methods: Vec<MethodInfo>,
    ancestors: Vec<Arc<TypeInfo>>,
}

impl TypeInfo {
    pub fn builder(name: impl Into<String>) -> TypeInfoBuilder {
        TypeInfoBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_sealed(&self) -> bool {
        self.is_sealed
    }

    /// Generic parameter names. Non-empty means this is an open generic
    /// definition that cannot be instantiated without argument binding.
    pub fn type_params(&self) -> &[String] {
        &self.type_params
    }

    pub fn is_generic_definition(&self) -> bool {
        !self.type_params.is_empty()
    }

    /// Markers declared directly at this level, not inherited.
    pub fn markers(&self) -> &[TypeMarker] {
        &self.markers
    }

    /// Methods declared directly at this level, not inherited.
    pub fn methods(&self) -> &[MethodInfo] {
        &self.methods
    }

    /// The ancestor chain, nearest first, excluding self.
    pub fn ancestors(&self) -> &[Arc<TypeInfo>] {
        &self.ancestors
    }

    /// All declaration levels: self first, then ancestors nearest-first.
    pub fn hierarchy(&self) -> impl Iterator<Item = &TypeInfo> {
        std::iter::once(self).chain(self.ancestors.iter().map(Arc::as_ref))
    }

    /// Fixture markers declared directly at this level.
    pub fn fixture_markers(&self) -> impl Iterator<Item = &FixtureMarker> {
        self.markers.iter().filter_map(TypeMarker::as_fixture)
    }

    pub fn has_fixture_markers(&self) -> bool {
        self.fixture_markers().next().is_some()
    }

    /// The reason of an `Ignore` marker declared directly at this level.
    pub fn ignore_reason(&self) -> Option<&str> {
        self.markers.iter().find_map(|marker| match marker {
            TypeMarker::Ignore { reason } => Some(reason.as_str()),
            _ => None,
        })
    }
}

pub struct TypeInfoBuilder {
    name: String,
    is_abstract: bool,
    is_sealed: bool,
    type_params: Vec<String>,
    markers: Vec<TypeMarker>,
    methods: Vec<MethodInfo>,
    ancestors: Vec<Arc<TypeInfo>>,
}

impl TypeInfoBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_abstract: false,
            is_sealed: false,
            type_params: Vec::new(),
            markers: Vec::new(),
            methods: Vec::new(),
            ancestors: Vec::new(),
        }
    }

    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn sealed(mut self) -> Self {
        self.is_sealed = true;
        self
    }

    pub fn type_param(mut self, name: impl Into<String>) -> Self {
        self.type_params.push(name.into());
        self
    }

    pub fn marker(mut self, marker: TypeMarker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn fixture_marker(mut self, marker: FixtureMarker) -> Self {
        self.markers.push(TypeMarker::Fixture(marker));
        self
    }

    pub fn method(mut self, method: MethodInfo) -> Self {
        self.methods.push(method);
        self
    }

    /// Sets the direct base type. The full ancestor chain is derived from
    /// the parent's own pre-computed chain.
    pub fn inherits(mut self, parent: &Arc<TypeInfo>) -> Self {
        self.ancestors = std::iter::once(Arc::clone(parent))
            .chain(parent.ancestors.iter().cloned())
            .collect();
        self
    }

    pub fn build(self) -> Arc<TypeInfo> {
        Arc::new(TypeInfo {
            name: self.name,
            is_abstract: self.is_abstract,
            is_sealed: self.is_sealed,
            type_params: self.type_params,
            markers: self.markers,
            methods: self.methods,
            ancestors: self.ancestors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchy_yields_self_first() {
        let base = TypeInfo::builder("Base").build();
        let mid = TypeInfo::builder("Mid").inherits(&base).build();
        let leaf = TypeInfo::builder("Leaf").inherits(&mid).build();

        let names: Vec<&str> = leaf.hierarchy().map(TypeInfo::name).collect();
        assert_eq!(names, vec!["Leaf", "Mid", "Base"]);
    }

    #[test]
    fn inherits_derives_full_chain_from_parent() {
        let base = TypeInfo::builder("Base").build();
        let mid = TypeInfo::builder("Mid").inherits(&base).build();
        let leaf = TypeInfo::builder("Leaf").inherits(&mid).build();

        assert_eq!(leaf.ancestors().len(), 2);
        assert_eq!(leaf.ancestors()[0].name(), "Mid");
        assert_eq!(leaf.ancestors()[1].name(), "Base");
    }

    #[test]
    fn generic_definition_requires_type_params() {
        let plain = TypeInfo::builder("Plain").build();
        let generic = TypeInfo::builder("Holder").type_param("T").build();

        assert!(!plain.is_generic_definition());
        assert!(generic.is_generic_definition());
    }
}
