use crate::ast;
use crate::generate::BuildFailure;
use crate::generate::DeclarationError;
use crate::resolve::FieldResolver;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::FieldConfig;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ResolvedType;
use crate::types::ScalarType;
use crate::types::TypeConfig;
use crate::types::UnionType;
use indexmap::IndexMap;

/// One registry slot: the finished node plus the configuration it was built
/// from.
#[derive(Clone, Debug, PartialEq)]
struct RegistryEntry {
    node: ResolvedType,
    config: TypeConfig,
}

/// The shared mapping from type name to resolved node and builder
/// configuration.
///
/// Partitioned by kind through the [`ResolvedType`] variants, but a single
/// flat name space for lookup: names are unique across all six kinds
/// combined, and a second declaration reusing a name is rejected rather than
/// silently overwritten.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeRegistry {
    entries: IndexMap<String, RegistryEntry>,
}
impl TypeRegistry {
    pub(crate) fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Records a freshly resolved declaration. Fails fatally if the name is
    /// already taken by any kind of type.
    pub(crate) fn insert(
        &mut self,
        name: &str,
        node: ResolvedType,
        config: TypeConfig,
        position: ast::Pos,
    ) -> Result<(), BuildFailure> {
        if self.entries.contains_key(name) {
            return Err(DeclarationError::DuplicateTypeName {
                name: name.to_string(),
                position,
            }.into());
        }
        self.entries.insert(name.to_string(), RegistryEntry {
            node,
            config,
        });
        Ok(())
    }

    /// Replaces an existing entry with a node rebuilt from an updated
    /// configuration. The caller must have verified the name exists.
    pub(crate) fn replace(
        &mut self,
        name: &str,
        node: ResolvedType,
        config: TypeConfig,
    ) {
        self.entries.insert(name.to_string(), RegistryEntry {
            node,
            config,
        });
    }

    /// Merges extension fields into an already-resolved object, updating the
    /// live node and its retained configuration together. Merge policy:
    /// last-applied wins on a name collision.
    pub(crate) fn extend_object(
        &mut self,
        name: &str,
        fields: IndexMap<String, FieldConfig>,
    ) {
        if let Some(entry) = self.entries.get_mut(name) {
            if let (
                ResolvedType::Object(obj_type),
                TypeConfig::Object(obj_config),
            ) = (&mut entry.node, &mut entry.config) {
                for (field_name, field_config) in fields {
                    obj_type.fields.insert(
                        field_name.clone(),
                        Field::new(field_name.clone(), field_config.clone()),
                    );
                    obj_config.fields.insert(field_name, field_config);
                }
            }
        }
    }

    /// Attaches a resolver to a live field in place, on both the node and the
    /// retained configuration (so a later rebuild keeps the attachment).
    pub(crate) fn attach_resolver(
        &mut self,
        type_name: &str,
        field_name: &str,
        resolver: FieldResolver,
    ) {
        if let Some(entry) = self.entries.get_mut(type_name) {
            let (node_field, config_field) = match (
                &mut entry.node,
                &mut entry.config,
            ) {
                (
                    ResolvedType::Object(obj_type),
                    TypeConfig::Object(obj_config),
                ) => (
                    obj_type.fields.get_mut(field_name),
                    obj_config.fields.get_mut(field_name),
                ),
                (
                    ResolvedType::Interface(iface_type),
                    TypeConfig::Interface(iface_config),
                ) => (
                    iface_type.fields.get_mut(field_name),
                    iface_config.fields.get_mut(field_name),
                ),
                _ => (None, None),
            };
            if let Some(field) = node_field {
                field.resolver = Some(resolver.clone());
            }
            if let Some(field_config) = config_field {
                field_config.resolver = Some(resolver);
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedType> {
        self.entries.get(name).map(|entry| &entry.node)
    }

    /// The retained builder configuration for a resolved type.
    pub fn config(&self, name: &str) -> Option<&TypeConfig> {
        self.entries.get(name).map(|entry| &entry.config)
    }

    pub fn object(&self, name: &str) -> Option<&ObjectType> {
        self.get(name).and_then(ResolvedType::as_object)
    }

    pub fn interface(&self, name: &str) -> Option<&InterfaceType> {
        self.get(name).and_then(ResolvedType::as_interface)
    }

    pub fn union(&self, name: &str) -> Option<&UnionType> {
        self.get(name).and_then(ResolvedType::as_union)
    }

    pub fn enum_type(&self, name: &str) -> Option<&EnumType> {
        self.get(name).and_then(ResolvedType::as_enum)
    }

    pub fn scalar(&self, name: &str) -> Option<&ScalarType> {
        self.get(name).and_then(ResolvedType::as_scalar)
    }

    pub fn input_object(&self, name: &str) -> Option<&InputObjectType> {
        self.get(name).and_then(ResolvedType::as_input_object)
    }

    /// All resolved type names, in resolution order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
