use std::fmt;

/// Discriminant for the six declarable type kinds.
///
/// Used in diagnostics wherever a name resolved to a type of the wrong kind
/// (e.g. a union member that names an enum, or a configuration transform
/// applied to a type of another kind).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TypeKind::Enum => "enum",
            TypeKind::InputObject => "input object",
            TypeKind::Interface => "interface",
            TypeKind::Object => "object",
            TypeKind::Scalar => "scalar",
            TypeKind::Union => "union",
        })
    }
}
