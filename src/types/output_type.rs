use crate::ast;
use crate::generate::BuildFailure;
use crate::generate::DeclaredNames;
use std::fmt;

/// The five built-in primitive scalar types.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuiltinScalar {
    Boolean,
    Float,
    ID,
    Int,
    String,
}
impl fmt::Display for BuiltinScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BuiltinScalar::Boolean => "Boolean",
            BuiltinScalar::Float => "Float",
            BuiltinScalar::ID => "ID",
            BuiltinScalar::Int => "Int",
            BuiltinScalar::String => "String",
        })
    }
}

/// A fully mapped output type: `NonNull`/`List` wrappers around either a
/// built-in scalar or a named reference into the
/// [`TypeRegistry`](crate::TypeRegistry).
///
/// Named references are deliberately kept as names rather than direct links;
/// dereferencing through the registry is what makes self-referential and
/// mutually-referential declarations representable without ownership cycles.
#[derive(Clone, Debug, PartialEq)]
pub enum OutputTypeRef {
    Builtin(BuiltinScalar),
    List(Box<OutputTypeRef>),
    Named(String),
    NonNull(Box<OutputTypeRef>),
}
impl OutputTypeRef {
    /// Maps a type-reference AST node to a concrete [`OutputTypeRef`].
    ///
    /// Recursively unwraps `NonNull` and `List` markers, matches the base
    /// name against the built-in scalars, and otherwise requires the name to
    /// be declared somewhere in the document. The result stays a name and is
    /// dereferenced through the registry on use, so the named declaration
    /// need not be materialized yet; this is what lets self-referencing and
    /// mutually-referencing declarations resolve in a single pass.
    ///
    /// Pure: never creates registry entries. An undeclared name is reported
    /// as a pending-dependency, which persists to the fixpoint and surfaces
    /// as an unresolved declaration.
    pub(crate) fn from_ast(
        declared: &DeclaredNames,
        ast_type: &ast::schema::Type,
    ) -> Result<Self, BuildFailure> {
        match ast_type {
            ast::schema::Type::NonNullType(inner) =>
                Ok(Self::NonNull(Box::new(Self::from_ast(
                    declared,
                    inner,
                )?))),

            ast::schema::Type::ListType(inner) =>
                Ok(Self::List(Box::new(Self::from_ast(
                    declared,
                    inner,
                )?))),

            ast::schema::Type::NamedType(name) => match name.as_str() {
                "Boolean" => Ok(Self::Builtin(BuiltinScalar::Boolean)),
                "Float" => Ok(Self::Builtin(BuiltinScalar::Float)),
                "ID" => Ok(Self::Builtin(BuiltinScalar::ID)),
                "Int" => Ok(Self::Builtin(BuiltinScalar::Int)),
                "String" => Ok(Self::Builtin(BuiltinScalar::String)),
                _ =>
                    if declared.contains(name) {
                        Ok(Self::Named(name.to_string()))
                    } else {
                        Err(BuildFailure::unknown_type(name))
                    },
            },
        }
    }

    /// Recursively unwraps this reference and returns the inner-most
    /// built-in scalar, if the base type is one.
    pub fn innermost_builtin(&self) -> Option<BuiltinScalar> {
        match self {
            Self::Builtin(scalar) => Some(*scalar),
            Self::List(inner) | Self::NonNull(inner) =>
                inner.innermost_builtin(),
            Self::Named(_) => None,
        }
    }

    /// Recursively unwraps this reference and returns the inner-most named
    /// type, if the base type is a registry reference.
    pub fn innermost_named(&self) -> Option<&str> {
        match self {
            Self::Builtin(_) => None,
            Self::List(inner) | Self::NonNull(inner) =>
                inner.innermost_named(),
            Self::Named(name) => Some(name.as_str()),
        }
    }
}
impl fmt::Display for OutputTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(scalar) => write!(f, "{scalar}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(name) => f.write_str(name),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
