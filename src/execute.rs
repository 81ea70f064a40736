use crate::ast;
use crate::resolve::ResolveError;
use crate::resolve::ResolveParams;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectType;
use indexmap::IndexMap;
use serde_json::json;
use thiserror::Error;

type Result<T> = std::result::Result<T, ExecuteError>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExecuteError {
    #[error("error parsing query document: {err}")]
    ParseError {
        err: String,
    },

    #[error("the query document contains no executable operation")]
    NoOperation,

    #[error("only query operations are supported (found {found})")]
    UnsupportedOperation {
        found: String,
    },

    #[error("fragments are not supported")]
    UnsupportedFragment,

    #[error("variables are not supported (found `${name}`)")]
    UnsupportedVariable {
        name: String,
    },

    #[error("cannot query field `{field_name}` on type `{type_name}`")]
    UndefinedField {
        type_name: String,
        field_name: String,
    },

    #[error("field `{type_name}.{field_name}` failed to resolve: {source}")]
    ResolverError {
        type_name: String,
        field_name: String,
        source: ResolveError,
    },
}

/// Executes a query string against an assembled schema, producing a response
/// document of the shape `{"data": …}`.
///
/// This is a minimal execution engine: selection sets are walked from the
/// root query type, attached resolvers are invoked with the field's
/// arguments, and fields without a resolver fall back to a property lookup on
/// the parent value. Fragments and variables are rejected explicitly.
pub fn execute(
    schema: &Schema,
    query: &str,
) -> Result<serde_json::Value> {
    let doc = graphql_parser::query::parse_query::<String>(query)
        .map_err(|err| ExecuteError::ParseError {
            err: err.to_string(),
        })?
        .into_static();

    let operation = doc.definitions.into_iter()
        .find_map(|def| match def {
            ast::query::Definition::Operation(op) => Some(op),
            ast::query::Definition::Fragment(_) => None,
        })
        .ok_or(ExecuteError::NoOperation)?;

    let selection_set = match operation {
        ast::query::OperationDefinition::SelectionSet(selection_set) =>
            selection_set,
        ast::query::OperationDefinition::Query(query_op) => {
            if let Some(var_def) = query_op.variable_definitions.first() {
                return Err(ExecuteError::UnsupportedVariable {
                    name: var_def.name.clone(),
                });
            }
            query_op.selection_set
        },
        ast::query::OperationDefinition::Mutation(_) =>
            return Err(ExecuteError::UnsupportedOperation {
                found: "mutation".to_string(),
            }),
        ast::query::OperationDefinition::Subscription(_) =>
            return Err(ExecuteError::UnsupportedOperation {
                found: "subscription".to_string(),
            }),
    };

    let data = execute_selection_set(
        schema,
        schema.query_type(),
        &selection_set,
        None,
    )?;
    Ok(json!({ "data": data }))
}

fn execute_selection_set(
    schema: &Schema,
    object: &ObjectType,
    selection_set: &ast::query::SelectionSet,
    parent: Option<&serde_json::Value>,
) -> Result<serde_json::Value> {
    let mut out = serde_json::Map::new();
    for selection in &selection_set.items {
        let field_sel = match selection {
            ast::query::Selection::Field(field_sel) => field_sel,
            ast::query::Selection::FragmentSpread(_)
                | ast::query::Selection::InlineFragment(_) =>
                return Err(ExecuteError::UnsupportedFragment),
        };

        let field = object.field(&field_sel.name)
            .ok_or_else(|| ExecuteError::UndefinedField {
                type_name: object.name.clone(),
                field_name: field_sel.name.clone(),
            })?;

        let args = collect_arguments(field, field_sel)?;
        let value = match &field.resolver {
            Some(resolver) => resolver.call(ResolveParams {
                parent,
                args,
            }).map_err(|source| ExecuteError::ResolverError {
                type_name: object.name.clone(),
                field_name: field.name.clone(),
                source,
            })?,
            None => default_resolve(parent, &field_sel.name),
        };

        let value = complete_value(schema, field, field_sel, value)?;
        let response_key = field_sel.alias.clone()
            .unwrap_or_else(|| field_sel.name.clone());
        out.insert(response_key, value);
    }
    Ok(serde_json::Value::Object(out))
}

/// Property lookup on the parent value, for fields with no attached resolver.
fn default_resolve(
    parent: Option<&serde_json::Value>,
    name: &str,
) -> serde_json::Value {
    parent.and_then(|parent| parent.get(name))
        .cloned()
        .unwrap_or(serde_json::Value::Null)
}

/// Descends into a sub-selection when the field selects one and its base type
/// is an object, mapping over list values element-wise.
fn complete_value(
    schema: &Schema,
    field: &Field,
    field_sel: &ast::query::Field,
    value: serde_json::Value,
) -> Result<serde_json::Value> {
    if field_sel.selection_set.items.is_empty() {
        return Ok(value);
    }

    let inner_object = field.type_ref.innermost_named()
        .and_then(|name| schema.registry().object(name));
    let Some(inner_object) = inner_object else {
        return Ok(value);
    };

    match value {
        serde_json::Value::Null => Ok(serde_json::Value::Null),
        serde_json::Value::Array(items) => Ok(serde_json::Value::Array(
            items.into_iter()
                .map(|item| execute_selection_set(
                    schema,
                    inner_object,
                    &field_sel.selection_set,
                    Some(&item),
                ))
                .collect::<Result<_>>()?,
        )),
        other => execute_selection_set(
            schema,
            inner_object,
            &field_sel.selection_set,
            Some(&other),
        ),
    }
}

/// Declared argument defaults overlaid with the literal arguments supplied in
/// the query.
fn collect_arguments(
    field: &Field,
    field_sel: &ast::query::Field,
) -> Result<IndexMap<String, serde_json::Value>> {
    let mut args = IndexMap::new();
    for (name, argument) in &field.arguments {
        if let Some(default_value) = &argument.default_value {
            args.insert(name.clone(), default_value.to_json());
        }
    }
    for (name, value) in &field_sel.arguments {
        args.insert(name.clone(), query_value_to_json(value)?);
    }
    Ok(args)
}

fn query_value_to_json(
    value: &ast::query::Value,
) -> Result<serde_json::Value> {
    match value {
        ast::query::Value::Variable(name) =>
            Err(ExecuteError::UnsupportedVariable {
                name: name.clone(),
            }),
        ast::query::Value::Int(value) =>
            Ok(value.as_i64().map_or(serde_json::Value::Null, |int| {
                json!(int)
            })),
        ast::query::Value::Float(value) => Ok(json!(value)),
        ast::query::Value::String(value) => Ok(json!(value)),
        ast::query::Value::Boolean(value) => Ok(json!(value)),
        ast::query::Value::Null => Ok(serde_json::Value::Null),
        ast::query::Value::Enum(name) => Ok(json!(name)),
        ast::query::Value::List(values) => Ok(serde_json::Value::Array(
            values.iter()
                .map(query_value_to_json)
                .collect::<Result<_>>()?,
        )),
        ast::query::Value::Object(entries) => Ok(serde_json::Value::Object(
            entries.iter()
                .map(|(key, value)| {
                    Ok((key.clone(), query_value_to_json(value)?))
                })
                .collect::<Result<_>>()?,
        )),
    }
}
