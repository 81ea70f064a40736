use crate::ExecuteError;
use crate::ResolveError;
use crate::Schema;
use crate::execute;
use crate::generate;
use serde_json::json;

fn hello_schema() -> Schema {
    let mut ctx = generate("type Query { hello: String }").unwrap();
    ctx.cursor()
        .locate("Query").unwrap()
        .field("hello").unwrap()
        .resolve(|_params| Ok(json!("world")));
    ctx.into_schema().unwrap()
}

#[test]
fn resolves_a_root_field() {
    let schema = hello_schema();
    assert_eq!(
        execute(&schema, "{ hello }").unwrap(),
        json!({"data": {"hello": "world"}}),
    );
}

#[test]
fn aliases_rename_response_keys() {
    let schema = hello_schema();
    assert_eq!(
        execute(&schema, "{ greeting: hello }").unwrap(),
        json!({"data": {"greeting": "world"}}),
    );
}

#[test]
fn fields_without_a_resolver_fall_back_to_parent_properties() {
    let mut ctx = generate(
        "type User { name: String email: String } \
         type Query { user: User }",
    ).unwrap();
    ctx.cursor()
        .locate("Query").unwrap()
        .field("user").unwrap()
        .resolve(|_params| Ok(json!({"name": "Ada", "email": "ada@io"})));
    let schema = ctx.into_schema().unwrap();

    assert_eq!(
        execute(&schema, "{ user { name } }").unwrap(),
        json!({"data": {"user": {"name": "Ada"}}}),
    );
}

#[test]
fn root_fields_without_a_resolver_yield_null() {
    let schema = generate("type Query { hello: String }").unwrap()
        .into_schema().unwrap();
    assert_eq!(
        execute(&schema, "{ hello }").unwrap(),
        json!({"data": {"hello": null}}),
    );
}

#[test]
fn list_values_are_completed_element_wise() {
    let mut ctx = generate(
        "type User { name: String } \
         type Query { users: [User] }",
    ).unwrap();
    ctx.cursor()
        .locate("Query").unwrap()
        .field("users").unwrap()
        .resolve(|_params| Ok(json!([{"name": "Ada"}, {"name": "Bob"}])));
    let schema = ctx.into_schema().unwrap();

    assert_eq!(
        execute(&schema, "{ users { name } }").unwrap(),
        json!({"data": {"users": [{"name": "Ada"}, {"name": "Bob"}]}}),
    );
}

#[test]
fn argument_defaults_reach_the_resolver() {
    let mut ctx = generate(
        "type Query { greet(name: String = \"world\"): String }",
    ).unwrap();
    ctx.cursor()
        .locate("Query").unwrap()
        .field("greet").unwrap()
        .resolve(|params| {
            let name = params.arg("name")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("?");
            Ok(json!(format!("Hello, {name}!")))
        });
    let schema = ctx.into_schema().unwrap();

    assert_eq!(
        execute(&schema, "{ greet }").unwrap(),
        json!({"data": {"greet": "Hello, world!"}}),
    );
    assert_eq!(
        execute(&schema, "{ greet(name: \"Rust\") }").unwrap(),
        json!({"data": {"greet": "Hello, Rust!"}}),
    );
}

#[test]
fn resolver_errors_carry_field_context() {
    let mut ctx = generate("type Query { fail: String }").unwrap();
    ctx.cursor()
        .locate("Query").unwrap()
        .field("fail").unwrap()
        .resolve(|_params| Err(ResolveError::new("boom")));
    let schema = ctx.into_schema().unwrap();

    assert_eq!(
        execute(&schema, "{ fail }").unwrap_err(),
        ExecuteError::ResolverError {
            type_name: "Query".to_string(),
            field_name: "fail".to_string(),
            source: ResolveError::new("boom"),
        },
    );
}

#[test]
fn undefined_fields_are_an_error() {
    let schema = hello_schema();
    assert_eq!(
        execute(&schema, "{ nope }").unwrap_err(),
        ExecuteError::UndefinedField {
            type_name: "Query".to_string(),
            field_name: "nope".to_string(),
        },
    );
}

#[test]
fn mutation_operations_are_rejected() {
    let schema = hello_schema();
    assert_eq!(
        execute(&schema, "mutation { hello }").unwrap_err(),
        ExecuteError::UnsupportedOperation {
            found: "mutation".to_string(),
        },
    );
}

#[test]
fn variable_definitions_are_rejected() {
    let schema = hello_schema();
    assert_eq!(
        execute(&schema, "query Q($x: Int) { hello }").unwrap_err(),
        ExecuteError::UnsupportedVariable {
            name: "x".to_string(),
        },
    );
}

#[test]
fn fragments_are_rejected() {
    let schema = hello_schema();
    assert_eq!(
        execute(&schema, "{ ... on Query { hello } }").unwrap_err(),
        ExecuteError::UnsupportedFragment,
    );
}
