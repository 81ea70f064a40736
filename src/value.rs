use crate::ast;
use crate::types::BuiltinScalar;
use crate::types::OutputTypeRef;
use indexmap::IndexMap;

/// A resolved literal value, produced from a default-value literal declared
/// in the schema document.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    /// Structural conversion from an AST literal, with no expected type to
    /// check against. Used for literals whose declared type is a named
    /// (non-built-in) type.
    pub(crate) fn from_ast(
        ast_value: &ast::schema::Value,
    ) -> Result<Self, MalformedValue> {
        match ast_value {
            ast::schema::Value::Variable(name) =>
                Err(MalformedValue {
                    detail: format!(
                        "default values may not reference variables \
                        (found `${name}`)",
                    ),
                }),

            ast::schema::Value::Int(value) =>
                value.as_i64()
                    .map(Value::Int)
                    .ok_or_else(|| MalformedValue {
                        detail: "integer literal out of range".to_string(),
                    }),

            ast::schema::Value::Float(value) =>
                Ok(Value::Float(*value)),

            ast::schema::Value::String(value) =>
                Ok(Value::String(value.clone())),

            ast::schema::Value::Boolean(value) =>
                Ok(Value::Bool(*value)),

            ast::schema::Value::Null =>
                Ok(Value::Null),

            ast::schema::Value::Enum(value) =>
                Ok(Value::Enum(value.clone())),

            ast::schema::Value::List(values) =>
                Ok(Value::List(
                    values.iter()
                        .map(Value::from_ast)
                        .collect::<Result<_, _>>()?,
                )),

            ast::schema::Value::Object(entries) =>
                Ok(Value::Object(
                    entries.iter()
                        .map(|(key, ast_value)| {
                            Ok((key.clone(), Value::from_ast(ast_value)?))
                        })
                        .collect::<Result<_, _>>()?,
                )),
        }
    }

    /// Resolves an AST literal against the declared type it defaults,
    /// rejecting literals that cannot be read as the target's primitive kind.
    pub(crate) fn resolve(
        ast_value: &ast::schema::Value,
        expected: &OutputTypeRef,
    ) -> Result<Self, MalformedValue> {
        match expected {
            OutputTypeRef::NonNull(inner) =>
                Self::resolve(ast_value, inner),

            OutputTypeRef::List(inner) => match ast_value {
                ast::schema::Value::List(values) =>
                    Ok(Value::List(
                        values.iter()
                            .map(|value| Self::resolve(value, inner))
                            .collect::<Result<_, _>>()?,
                    )),
                ast::schema::Value::Null =>
                    Ok(Value::Null),
                // Single-value literals coerce to a one-element list.
                other =>
                    Ok(Value::List(vec![Self::resolve(other, inner)?])),
            },

            OutputTypeRef::Builtin(scalar) =>
                Self::resolve_builtin(ast_value, *scalar),

            // Enums, input objects, and custom scalars are taken
            // structurally; their coercion semantics are out of scope.
            OutputTypeRef::Named(_) =>
                Self::from_ast(ast_value),
        }
    }

    fn resolve_builtin(
        ast_value: &ast::schema::Value,
        scalar: BuiltinScalar,
    ) -> Result<Self, MalformedValue> {
        use BuiltinScalar::*;
        match (scalar, ast_value) {
            (_, ast::schema::Value::Null) =>
                Ok(Value::Null),

            (Boolean, ast::schema::Value::Boolean(value)) =>
                Ok(Value::Bool(*value)),

            (Float, ast::schema::Value::Float(value)) =>
                Ok(Value::Float(*value)),
            (Float, ast::schema::Value::Int(value)) =>
                value.as_i64()
                    .map(|int| Value::Float(int as f64))
                    .ok_or_else(|| MalformedValue {
                        detail: "integer literal out of range".to_string(),
                    }),

            (Int, ast::schema::Value::Int(value)) =>
                value.as_i64()
                    .map(Value::Int)
                    .ok_or_else(|| MalformedValue {
                        detail: "integer literal out of range".to_string(),
                    }),

            (ID | String, ast::schema::Value::String(value)) =>
                Ok(Value::String(value.clone())),

            (scalar, other) =>
                Err(MalformedValue {
                    detail: format!(
                        "`{other}` is not a valid {scalar} literal",
                    ),
                }),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Bool(value) => serde_json::Value::Bool(*value),
            Value::Enum(name) => serde_json::Value::String(name.clone()),
            Value::Float(value) => serde_json::json!(value),
            Value::Int(value) => serde_json::json!(value),
            Value::List(values) => serde_json::Value::Array(
                values.iter().map(Value::to_json).collect(),
            ),
            Value::Null => serde_json::Value::Null,
            Value::Object(entries) => serde_json::Value::Object(
                entries.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Value::String(value) => serde_json::Value::String(value.clone()),
        }
    }
}

/// Raised when a declared default value cannot be resolved against the type
/// it defaults. Always a fatal (non-retryable) condition.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MalformedValue {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(sdl_type: &str, literal: &str) -> ast::schema::Value {
        // Ride the schema parser to build literal AST nodes.
        let sdl = format!("input I {{ f: {sdl_type} = {literal} }}");
        let doc = graphql_parser::schema::parse_schema::<String>(&sdl)
            .expect("valid test SDL")
            .into_static();
        for def in doc.definitions {
            if let graphql_parser::schema::Definition::TypeDefinition(
                graphql_parser::schema::TypeDefinition::InputObject(input_def),
            ) = def {
                return input_def.fields[0]
                    .default_value
                    .clone()
                    .expect("default value present");
            }
        }
        panic!("no input object in test SDL");
    }

    #[test]
    fn resolves_primitive_literals() {
        let int_type = OutputTypeRef::Builtin(BuiltinScalar::Int);
        assert_eq!(
            Value::resolve(&parse_default("Int", "42"), &int_type),
            Ok(Value::Int(42)),
        );

        let float_type = OutputTypeRef::Builtin(BuiltinScalar::Float);
        assert_eq!(
            Value::resolve(&parse_default("Float", "1.5"), &float_type),
            Ok(Value::Float(1.5)),
        );

        let string_type = OutputTypeRef::Builtin(BuiltinScalar::String);
        assert_eq!(
            Value::resolve(&parse_default("String", "\"hi\""), &string_type),
            Ok(Value::String("hi".to_string())),
        );

        let bool_type = OutputTypeRef::Builtin(BuiltinScalar::Boolean);
        assert_eq!(
            Value::resolve(&parse_default("Boolean", "true"), &bool_type),
            Ok(Value::Bool(true)),
        );
    }

    #[test]
    fn int_literal_coerces_to_float() {
        let float_type = OutputTypeRef::Builtin(BuiltinScalar::Float);
        assert_eq!(
            Value::resolve(&parse_default("Float", "3"), &float_type),
            Ok(Value::Float(3.0)),
        );
    }

    #[test]
    fn list_literals_resolve_recursively() {
        let list_of_int = OutputTypeRef::List(Box::new(
            OutputTypeRef::Builtin(BuiltinScalar::Int),
        ));
        assert_eq!(
            Value::resolve(&parse_default("[Int]", "[1, 2, 3]"), &list_of_int),
            Ok(Value::List(vec![
                Value::Int(1),
                Value::Int(2),
                Value::Int(3),
            ])),
        );
    }

    #[test]
    fn mismatched_literal_is_malformed() {
        let int_type = OutputTypeRef::Builtin(BuiltinScalar::Int);
        let result = Value::resolve(
            &parse_default("Int", "\"not a number\""),
            &int_type,
        );
        assert!(result.is_err());
    }
}
