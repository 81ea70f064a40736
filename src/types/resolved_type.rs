use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeKind;
use crate::types::UnionType;

/// The finished, queryable representation of one declaration: a tagged union
/// over the six declarable kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl ResolvedType {
    pub fn name(&self) -> &str {
        match self {
            ResolvedType::Enum(t) => t.name.as_str(),
            ResolvedType::InputObject(t) => t.name.as_str(),
            ResolvedType::Interface(t) => t.name.as_str(),
            ResolvedType::Object(t) => t.name.as_str(),
            ResolvedType::Scalar(t) => t.name.as_str(),
            ResolvedType::Union(t) => t.name.as_str(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            ResolvedType::Enum(_) => TypeKind::Enum,
            ResolvedType::InputObject(_) => TypeKind::InputObject,
            ResolvedType::Interface(_) => TypeKind::Interface,
            ResolvedType::Object(_) => TypeKind::Object,
            ResolvedType::Scalar(_) => TypeKind::Scalar,
            ResolvedType::Union(_) => TypeKind::Union,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(obj_type) = self {
            Some(obj_type)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(iface_type) = self {
            Some(iface_type)
        } else {
            None
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(enum_type) = self {
            Some(enum_type)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(union_type) = self {
            Some(union_type)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(scalar_type) = self {
            Some(scalar_type)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(input_type) = self {
            Some(input_type)
        } else {
            None
        }
    }
}
