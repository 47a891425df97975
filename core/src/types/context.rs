use hashbrown::HashMap;

use crate::types::{StaticType, TypeRegistry};

/// Name → type knowledge shared by the analyzer and the VM.
///
/// Lives as long as the interpreter session, so later inputs type-check
/// against variables assigned by earlier ones.
#[derive(Debug, Clone, Default)]
pub struct TypeContext {
    registry: TypeRegistry,
    inferred: HashMap<String, StaticType>,
}

impl TypeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn inferred_type(&self, name: &str) -> Option<StaticType> {
        self.inferred.get(name).copied()
    }

    /// Records `ty` for `name`, returning the type it replaces.
    pub fn record(&mut self, name: impl Into<String>, ty: StaticType) -> Option<StaticType> {
        self.inferred.insert(name.into(), ty)
    }

    pub fn inferred(&self) -> impl Iterator<Item = (&str, StaticType)> {
        self.inferred.iter().map(|(name, ty)| (name.as_str(), *ty))
    }
}
