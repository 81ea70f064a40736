use crate::ast;
use crate::generate::BuildFailure;
use crate::generate::DeclarationError;
use crate::generate::DeclaredNames;
use crate::resolve::FieldResolver;
use crate::types::OutputTypeRef;
use crate::value::Value;
use indexmap::IndexMap;

/// A resolved output field on an object or interface type.
///
/// Structurally immutable once built; the only post-construction mutation is
/// resolver attachment through the cursor and field merges applied by
/// `extend` declarations.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub type_ref: OutputTypeRef,
    pub arguments: IndexMap<String, Argument>,
    pub resolver: Option<FieldResolver>,
}
impl Field {
    pub(crate) fn new(name: String, config: FieldConfig) -> Self {
        Self {
            name,
            type_ref: config.type_ref,
            arguments: config.arguments,
            resolver: config.resolver,
        }
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.get(name)
    }
}

/// A declared argument on a field, with its resolved default value (if any).
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: String,
    pub type_ref: OutputTypeRef,
    pub default_value: Option<Value>,
}

/// The plain-data configuration a [`Field`] is constructed from. Retained (as
/// part of the owning type's configuration) so the cursor's update operation
/// can rebuild a type from an edited copy.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub type_ref: OutputTypeRef,
    pub arguments: IndexMap<String, Argument>,
    pub resolver: Option<FieldResolver>,
}

/// Shared field-resolution logic for object types, interface types, and
/// object extensions: resolves every field's type and arguments through the
/// type mapper, attaching resolved default values where declared.
pub(crate) fn fields_from_ast(
    declared: &DeclaredNames,
    type_name: &str,
    fields: &[ast::schema::Field],
) -> Result<IndexMap<String, FieldConfig>, BuildFailure> {
    let mut field_configs = IndexMap::with_capacity(fields.len());
    for field_def in fields {
        let type_ref = OutputTypeRef::from_ast(
            declared,
            &field_def.field_type,
        )?;
        let arguments = arguments_from_ast(
            declared,
            type_name,
            &field_def.name,
            &field_def.arguments,
        )?;
        field_configs.insert(field_def.name.to_string(), FieldConfig {
            type_ref,
            arguments,
            resolver: None,
        });
    }
    Ok(field_configs)
}

fn arguments_from_ast(
    declared: &DeclaredNames,
    type_name: &str,
    field_name: &str,
    arguments: &[ast::schema::InputValue],
) -> Result<IndexMap<String, Argument>, BuildFailure> {
    let mut resolved = IndexMap::with_capacity(arguments.len());
    for input_val in arguments {
        let type_ref = OutputTypeRef::from_ast(
            declared,
            &input_val.value_type,
        )?;
        let default_value = input_val.default_value.as_ref()
            .map(|ast_value| Value::resolve(ast_value, &type_ref))
            .transpose()
            .map_err(|err| DeclarationError::MalformedDefaultValue {
                type_name: type_name.to_string(),
                field_name: format!("{field_name}.{}", input_val.name),
                detail: err.detail,
            })?;
        resolved.insert(input_val.name.to_string(), Argument {
            name: input_val.name.to_string(),
            type_ref,
            default_value,
        });
    }
    Ok(resolved)
}
