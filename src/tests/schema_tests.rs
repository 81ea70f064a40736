use crate::generate;
use crate::generate::GenerateError;

#[test]
fn assembles_with_the_conventional_query_root() {
    let schema = generate("type Query { hello: String }").unwrap()
        .into_schema().unwrap();
    assert_eq!(schema.query_type().name, "Query");
}

#[test]
fn schema_block_overrides_the_query_root() {
    let schema = generate(
        "schema { query: Root } \
         type Root { hello: String }",
    ).unwrap().into_schema().unwrap();
    assert_eq!(schema.query_type().name, "Root");
}

#[test]
fn missing_query_root_fails_assembly() {
    let err = generate("type Hello { test: Boolean }").unwrap()
        .into_schema().unwrap_err();
    assert_eq!(err, GenerateError::MissingRootType {
        root_name: "Query".to_string(),
    });
}

#[test]
fn conventional_mutation_root_is_detected() {
    let schema = generate(
        "type Query { hello: String } \
         type Mutation { rename(name: String): String }",
    ).unwrap().into_schema().unwrap();
    assert_eq!(schema.mutation_type().unwrap().name, "Mutation");
    assert!(schema.subscription_type().is_none());
}

#[test]
fn optional_roots_default_to_none() {
    let schema = generate("type Query { hello: String }").unwrap()
        .into_schema().unwrap();
    assert!(schema.mutation_type().is_none());
    assert!(schema.subscription_type().is_none());
}

#[test]
fn explicit_non_object_root_fails_assembly() {
    let err = generate(
        "schema { query: Query mutation: Act } \
         type Query { test: Boolean } \
         enum Act { GO }",
    ).unwrap().into_schema().unwrap_err();
    assert_eq!(err, GenerateError::MissingRootType {
        root_name: "Act".to_string(),
    });
}
