use crate::ast;
use crate::generate::BuildFailure;
use crate::generate::DeclarationError;
use crate::generate::DeclaredNames;
use crate::registry::TypeRegistry;
use crate::types::Field;
use crate::types::FieldConfig;
use crate::types::ResolvedType;
use crate::types::fields_from_ast;
use indexmap::IndexMap;
use std::collections::HashSet;

/// A resolved object type node.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub name: String,
    pub fields: IndexMap<String, Field>,
    /// Names of the interfaces this object implements, in declaration order.
    pub interfaces: Vec<String>,
}
impl ObjectType {
    pub(crate) fn new(config: ObjectConfig) -> Self {
        Self {
            name: config.name,
            fields: config.fields.into_iter()
                .map(|(name, field_config)| {
                    (name.clone(), Field::new(name, field_config))
                })
                .collect(),
            interfaces: config.interfaces,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }
}

/// Builder configuration for an [`ObjectType`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectConfig {
    pub name: String,
    pub fields: IndexMap<String, FieldConfig>,
    pub interfaces: Vec<String>,
}
impl ObjectConfig {
    /// Builds the configuration from a declaration node. Field types only
    /// need to be declared somewhere in the document, but every interface
    /// the object implements must already be a resolved interface in the
    /// registry (the kind check needs the materialized entry); an interface
    /// name that is not present yet is a retryable pending-dependency, a
    /// name of the wrong kind is fatal.
    pub(crate) fn from_ast(
        registry: &TypeRegistry,
        declared: &DeclaredNames,
        def: &ast::schema::ObjectType,
    ) -> Result<Self, BuildFailure> {
        let mut interface_names = HashSet::new();
        let mut interfaces = vec![];
        for iface_name in &def.implements_interfaces {
            if !interface_names.insert(iface_name.as_str()) {
                return Err(
                    DeclarationError::DuplicateInterfaceImplementsDeclaration {
                        type_name: def.name.to_string(),
                        interface_name: iface_name.to_string(),
                        position: def.position,
                    }.into(),
                );
            }
            match registry.get(iface_name) {
                Some(ResolvedType::Interface(_)) =>
                    interfaces.push(iface_name.to_string()),
                Some(other) =>
                    return Err(DeclarationError::IncompatibleInterface {
                        type_name: def.name.to_string(),
                        interface_name: iface_name.to_string(),
                        actual: other.kind(),
                        position: def.position,
                    }.into()),
                None =>
                    return Err(BuildFailure::unknown_type(iface_name)),
            }
        }

        Ok(Self {
            name: def.name.to_string(),
            fields: fields_from_ast(declared, &def.name, &def.fields)?,
            interfaces,
        })
    }
}
