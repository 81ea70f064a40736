use crate::registry::TypeRegistry;
use crate::resolve::FieldResolver;
use crate::resolve::ResolveError;
use crate::resolve::ResolveParams;
use crate::types::ResolvedType;
use crate::types::TypeConfigKind;
use crate::types::TypeKind;
use thiserror::Error;

/// Error raised by the mutation cursor after initial resolution.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MutationError {
    #[error("no type or field named `{name}` was found")]
    NameNotFound {
        name: String,
    },

    #[error(
        "the `{name}` type is a declared {actual} type, but the supplied \
        transform expects {expected}"
    )]
    KindMismatch {
        name: String,
        expected: TypeKind,
        actual: TypeKind,
    },

    #[error(
        "an update transform may not rename a type (`{name}` was renamed to \
        `{renamed_to}`)"
    )]
    RenamedType {
        name: String,
        renamed_to: String,
    },
}

type Result<T> = std::result::Result<T, MutationError>;

/// Fluent navigation over an already-built type graph.
///
/// The cursor exposes two deliberately distinct mutation channels: a cheap
/// in-place resolver attachment on a located field (no structural change),
/// and a reconstruct-from-configuration [`update`](Cursor::update) that
/// replaces a whole registry entry.
#[derive(Debug)]
pub struct Cursor<'a> {
    registry: &'a mut TypeRegistry,
}
impl<'a> Cursor<'a> {
    pub(crate) fn new(registry: &'a mut TypeRegistry) -> Self {
        Self {
            registry,
        }
    }

    /// Locates a resolved type by name.
    pub fn locate(self, type_name: &str) -> Result<TypeCursor<'a>> {
        if !self.registry.contains(type_name) {
            return Err(MutationError::NameNotFound {
                name: type_name.to_string(),
            });
        }
        Ok(TypeCursor {
            registry: self.registry,
            type_name: type_name.to_string(),
        })
    }

    /// Retrieves the named type's retained configuration, applies the
    /// transform, and reconstructs the resolved node from the transformed
    /// configuration, replacing the registry entry.
    ///
    /// The transform is typed against the configuration kind it expects;
    /// naming a type of a different kind fails with
    /// [`MutationError::KindMismatch`]. The registry key is the entry's
    /// identity, so a transform that changes the configuration's name is
    /// rejected with [`MutationError::RenamedType`] before anything is
    /// replaced.
    pub fn update<C: TypeConfigKind>(
        self,
        type_name: &str,
        transform: impl FnOnce(C) -> C,
    ) -> Result<()> {
        let config = self.registry.config(type_name)
            .ok_or_else(|| MutationError::NameNotFound {
                name: type_name.to_string(),
            })?
            .clone();
        let actual = config.kind();
        let config = C::from_type_config(config)
            .ok_or_else(|| MutationError::KindMismatch {
                name: type_name.to_string(),
                expected: C::KIND,
                actual,
            })?;
        let config = transform(config).into_type_config();
        if config.name() != type_name {
            return Err(MutationError::RenamedType {
                name: type_name.to_string(),
                renamed_to: config.name().to_string(),
            });
        }
        let node = config.instantiate();
        self.registry.replace(type_name, node, config);
        Ok(())
    }
}

/// A cursor positioned on one resolved type.
#[derive(Debug)]
pub struct TypeCursor<'a> {
    registry: &'a mut TypeRegistry,
    type_name: String,
}
impl<'a> TypeCursor<'a> {
    /// Locates a field by name on the located object or interface type.
    pub fn field(self, field_name: &str) -> Result<FieldCursor<'a>> {
        let found = match self.registry.get(&self.type_name) {
            Some(ResolvedType::Object(obj_type)) =>
                obj_type.field(field_name).is_some(),
            Some(ResolvedType::Interface(iface_type)) =>
                iface_type.field(field_name).is_some(),
            _ => false,
        };
        if !found {
            return Err(MutationError::NameNotFound {
                name: field_name.to_string(),
            });
        }
        Ok(FieldCursor {
            registry: self.registry,
            type_name: self.type_name,
            field_name: field_name.to_string(),
        })
    }
}

/// A cursor positioned on one field of an object or interface type.
#[derive(Debug)]
pub struct FieldCursor<'a> {
    registry: &'a mut TypeRegistry,
    type_name: String,
    field_name: String,
}
impl FieldCursor<'_> {
    /// Attaches a field-resolution callback to the located field in place.
    /// The field's structural shape is already fixed; only runtime behavior
    /// is added.
    pub fn resolve<F>(self, resolver: F) -> Self
    where
        F: Fn(
                ResolveParams<'_>,
            ) -> std::result::Result<serde_json::Value, ResolveError>
            + Send
            + Sync
            + 'static,
    {
        self.registry.attach_resolver(
            &self.type_name,
            &self.field_name,
            FieldResolver::new(resolver),
        );
        self
    }
}
