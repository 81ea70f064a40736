use crate::types::EnumConfig;
use crate::types::EnumType;
use crate::types::InputObjectConfig;
use crate::types::InputObjectType;
use crate::types::InterfaceConfig;
use crate::types::InterfaceType;
use crate::types::ObjectConfig;
use crate::types::ObjectType;
use crate::types::ResolvedType;
use crate::types::ScalarConfig;
use crate::types::ScalarType;
use crate::types::TypeKind;
use crate::types::UnionConfig;
use crate::types::UnionType;

/// The builder configuration for one registry entry: a tagged union over the
/// six kind-specific configurations. Retained alongside each resolved node so
/// the cursor's update operation can reconstruct a node from an edited copy.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeConfig {
    Enum(EnumConfig),
    InputObject(InputObjectConfig),
    Interface(InterfaceConfig),
    Object(ObjectConfig),
    Scalar(ScalarConfig),
    Union(UnionConfig),
}
impl TypeConfig {
    pub fn name(&self) -> &str {
        match self {
            TypeConfig::Enum(config) => config.name.as_str(),
            TypeConfig::InputObject(config) => config.name.as_str(),
            TypeConfig::Interface(config) => config.name.as_str(),
            TypeConfig::Object(config) => config.name.as_str(),
            TypeConfig::Scalar(config) => config.name.as_str(),
            TypeConfig::Union(config) => config.name.as_str(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TypeConfig::Enum(_) => TypeKind::Enum,
            TypeConfig::InputObject(_) => TypeKind::InputObject,
            TypeConfig::Interface(_) => TypeKind::Interface,
            TypeConfig::Object(_) => TypeKind::Object,
            TypeConfig::Scalar(_) => TypeKind::Scalar,
            TypeConfig::Union(_) => TypeKind::Union,
        }
    }

    /// Constructs a fresh resolved node from this configuration.
    pub(crate) fn instantiate(&self) -> ResolvedType {
        match self.clone() {
            TypeConfig::Enum(config) =>
                ResolvedType::Enum(EnumType::new(config)),
            TypeConfig::InputObject(config) =>
                ResolvedType::InputObject(InputObjectType::new(config)),
            TypeConfig::Interface(config) =>
                ResolvedType::Interface(InterfaceType::new(config)),
            TypeConfig::Object(config) =>
                ResolvedType::Object(ObjectType::new(config)),
            TypeConfig::Scalar(config) =>
                ResolvedType::Scalar(ScalarType::new(config)),
            TypeConfig::Union(config) =>
                ResolvedType::Union(UnionType::new(config)),
        }
    }
}

/// Statically indexes the kind-specific configurations, so a configuration
/// transform is typed against the kind it expects: applying an
/// [`ObjectConfig`] transform to an enum is caught at the [`TypeConfig`]
/// boundary and reported as a kind mismatch instead of an unchecked cast.
pub trait TypeConfigKind: Sized {
    const KIND: TypeKind;

    fn from_type_config(config: TypeConfig) -> Option<Self>;
    fn into_type_config(self) -> TypeConfig;
}

macro_rules! impl_type_config_kind {
    ($config:ty, $variant:ident) => {
        impl TypeConfigKind for $config {
            const KIND: TypeKind = TypeKind::$variant;

            fn from_type_config(config: TypeConfig) -> Option<Self> {
                if let TypeConfig::$variant(config) = config {
                    Some(config)
                } else {
                    None
                }
            }

            fn into_type_config(self) -> TypeConfig {
                TypeConfig::$variant(self)
            }
        }
    };
}
impl_type_config_kind!(EnumConfig, Enum);
impl_type_config_kind!(InputObjectConfig, InputObject);
impl_type_config_kind!(InterfaceConfig, Interface);
impl_type_config_kind!(ObjectConfig, Object);
impl_type_config_kind!(ScalarConfig, Scalar);
impl_type_config_kind!(UnionConfig, Union);
