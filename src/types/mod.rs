mod config;
mod enum_type;
mod field;
mod input_object_type;
mod interface_type;
mod object_type;
mod output_type;
mod resolved_type;
mod scalar_type;
mod type_kind;
mod union_type;

pub use config::TypeConfig;
pub use config::TypeConfigKind;
pub use enum_type::EnumConfig;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Argument;
pub use field::Field;
pub use field::FieldConfig;
pub(crate) use field::fields_from_ast;
pub use input_object_type::InputField;
pub use input_object_type::InputObjectConfig;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceConfig;
pub use interface_type::InterfaceType;
pub use object_type::ObjectConfig;
pub use object_type::ObjectType;
pub use output_type::BuiltinScalar;
pub use output_type::OutputTypeRef;
pub use resolved_type::ResolvedType;
pub use scalar_type::ScalarConfig;
pub use scalar_type::ScalarType;
pub use type_kind::TypeKind;
pub use union_type::UnionConfig;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
