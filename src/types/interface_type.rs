use crate::ast;
use crate::generate::BuildFailure;
use crate::generate::DeclaredNames;
use crate::types::Field;
use crate::types::FieldConfig;
use crate::types::fields_from_ast;
use indexmap::IndexMap;

/// A resolved interface type node.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType {
    pub name: String,
    pub fields: IndexMap<String, Field>,
}
impl InterfaceType {
    pub(crate) fn new(config: InterfaceConfig) -> Self {
        Self {
            name: config.name,
            fields: config.fields.into_iter()
                .map(|(name, field_config)| {
                    (name.clone(), Field::new(name, field_config))
                })
                .collect(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }
}

/// Builder configuration for an [`InterfaceType`].
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceConfig {
    pub name: String,
    pub fields: IndexMap<String, FieldConfig>,
}
impl InterfaceConfig {
    pub(crate) fn from_ast(
        declared: &DeclaredNames,
        def: &ast::schema::InterfaceType,
    ) -> Result<Self, BuildFailure> {
        Ok(Self {
            name: def.name.to_string(),
            fields: fields_from_ast(declared, &def.name, &def.fields)?,
        })
    }
}
