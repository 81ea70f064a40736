use crate::ast;
use crate::generate::BuildFailure;
use crate::generate::DeclarationError;
use indexmap::IndexMap;

/// A resolved enum type node.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub(crate) fn new(config: EnumConfig) -> Self {
        Self {
            name: config.name,
            values: config.values,
        }
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }
}

/// One declared enum value. Ordinals are assigned by declaration order,
/// starting at 0, and are never renumbered.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub ordinal: usize,
}

/// Builder configuration for an [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumConfig {
    pub name: String,
    pub values: IndexMap<String, EnumValue>,
}
impl EnumConfig {
    pub(crate) fn from_ast(
        def: &ast::schema::EnumType,
    ) -> Result<Self, BuildFailure> {
        if def.values.is_empty() {
            return Err(DeclarationError::EnumWithNoValues {
                type_name: def.name.to_string(),
                position: def.position,
            }.into());
        }

        let mut values = IndexMap::with_capacity(def.values.len());
        for (ordinal, value) in def.values.iter().enumerate() {
            let prior = values.insert(value.name.to_string(), EnumValue {
                name: value.name.to_string(),
                ordinal,
            });
            if prior.is_some() {
                return Err(DeclarationError::DuplicateEnumValueDefinition {
                    type_name: def.name.to_string(),
                    value_name: value.name.to_string(),
                    position: def.position,
                }.into());
            }
        }

        Ok(Self {
            name: def.name.to_string(),
            values,
        })
    }
}
