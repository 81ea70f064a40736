use crate::ast;

/// A resolved custom scalar type node. Coercion semantics for custom scalars
/// are out of scope; the node exists so references to the name resolve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScalarType {
    pub name: String,
}
impl ScalarType {
    pub(crate) fn new(config: ScalarConfig) -> Self {
        Self {
            name: config.name,
        }
    }
}

/// Builder configuration for a [`ScalarType`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScalarConfig {
    pub name: String,
}
impl ScalarConfig {
    pub(crate) fn from_ast(def: &ast::schema::ScalarType) -> Self {
        Self {
            name: def.name.to_string(),
        }
    }
}
