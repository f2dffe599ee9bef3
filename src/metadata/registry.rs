use std::sync::Arc;

use crate::metadata::TypeInfo;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("type `{0}` is already registered")]
    DuplicateType(String),
}

/// Registration-ordered store of loaded type declarations.
///
/// This is the surface an outer scanner walks: it registers every declared
/// type once, then filters and builds through the suite builder facade.
#[derive(Debug, Default)]
pub struct DeclarationRegistry {
    types: Vec<Arc<TypeInfo>>,
}

impl DeclarationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, ty: Arc<TypeInfo>) -> Result<(), RegistryError> {
        if self.types.iter().any(|known| known.name() == ty.name()) {
            return Err(RegistryError::DuplicateType(ty.name().to_string()));
        }
        self.types.push(ty);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<TypeInfo>> {
        self.types.iter().find(|ty| ty.name() == name)
    }

    /// All registered types, in registration order.
    pub fn types(&self) -> &[Arc<TypeInfo>] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_preserves_order() {
        let mut registry = DeclarationRegistry::new();
        registry.register(TypeInfo::builder("B").build()).unwrap();
        registry.register(TypeInfo::builder("A").build()).unwrap();

        let names: Vec<&str> = registry.types().iter().map(|ty| ty.name()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = DeclarationRegistry::new();
        registry.register(TypeInfo::builder("A").build()).unwrap();

        let result = registry.register(TypeInfo::builder("A").build());
        assert!(matches!(result, Err(RegistryError::DuplicateType(_))));
    }

    #[test]
    fn lookup_by_name() {
        let mut registry = DeclarationRegistry::new();
        registry.register(TypeInfo::builder("A").build()).unwrap();

        assert!(registry.get("A").is_some());
        assert!(registry.get("B").is_none());
    }
}
