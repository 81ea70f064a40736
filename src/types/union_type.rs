use crate::ast;
use crate::generate::BuildFailure;
use crate::generate::DeclarationError;
use crate::registry::TypeRegistry;
use crate::types::ResolvedType;

/// A resolved union type node.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub name: String,
    /// Names of the member object types, in declaration order.
    pub members: Vec<String>,
}
impl UnionType {
    pub(crate) fn new(config: UnionConfig) -> Self {
        Self {
            name: config.name,
            members: config.members,
        }
    }
}

/// Builder configuration for a [`UnionType`].
#[derive(Clone, Debug, PartialEq)]
pub struct UnionConfig {
    pub name: String,
    pub members: Vec<String>,
}
impl UnionConfig {
    /// Every member must already be a resolved object type in the registry;
    /// an absent name is a retryable pending-dependency, a name of the wrong
    /// kind is fatal.
    pub(crate) fn from_ast(
        registry: &TypeRegistry,
        def: &ast::schema::UnionType,
    ) -> Result<Self, BuildFailure> {
        let mut members = vec![];
        for member_name in &def.types {
            match registry.get(member_name) {
                Some(ResolvedType::Object(_)) =>
                    members.push(member_name.to_string()),
                Some(other) =>
                    return Err(DeclarationError::IncompatibleUnionMember {
                        union_name: def.name.to_string(),
                        member_name: member_name.to_string(),
                        actual: other.kind(),
                        position: def.position,
                    }.into()),
                None =>
                    return Err(BuildFailure::unknown_type(member_name)),
            }
        }

        Ok(Self {
            name: def.name.to_string(),
            members,
        })
    }
}
