use crate::ast;
use crate::generate::BuildFailure;
use crate::generate::DeclarationError;
use crate::generate::DeclaredNames;
use crate::types::OutputTypeRef;
use crate::value::Value;
use indexmap::IndexMap;

/// A resolved input-object type node.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub name: String,
    pub fields: IndexMap<String, InputField>,
}
impl InputObjectType {
    pub(crate) fn new(config: InputObjectConfig) -> Self {
        Self {
            name: config.name,
            fields: config.fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.get(name)
    }
}

/// One declared input field, with its resolved default value (if any).
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub name: String,
    pub type_ref: OutputTypeRef,
    pub default_value: Option<Value>,
}

/// Builder configuration for an [`InputObjectType`].
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectConfig {
    pub name: String,
    pub fields: IndexMap<String, InputField>,
}
impl InputObjectConfig {
    pub(crate) fn from_ast(
        declared: &DeclaredNames,
        def: &ast::schema::InputObjectType,
    ) -> Result<Self, BuildFailure> {
        let mut fields = IndexMap::with_capacity(def.fields.len());
        for input_val in &def.fields {
            let type_ref = OutputTypeRef::from_ast(
                declared,
                &input_val.value_type,
            )?;
            let default_value = input_val.default_value.as_ref()
                .map(|ast_value| Value::resolve(ast_value, &type_ref))
                .transpose()
                .map_err(|err| DeclarationError::MalformedDefaultValue {
                    type_name: def.name.to_string(),
                    field_name: input_val.name.to_string(),
                    detail: err.detail,
                })?;
            fields.insert(input_val.name.to_string(), InputField {
                name: input_val.name.to_string(),
                type_ref,
                default_value,
            });
        }

        Ok(Self {
            name: def.name.to_string(),
            fields,
        })
    }
}
