use crate::Value;
use crate::generate;
use crate::generate::DeclarationError;
use crate::generate::GenerateError;
use crate::types::BuiltinScalar;
use crate::types::OutputTypeRef;
use crate::types::TypeKind;

fn declaration_errors(err: GenerateError) -> Vec<DeclarationError> {
    match err {
        GenerateError::FailedDeclarations { errors } => errors,
        other => panic!("expected failed declarations, got: {other}"),
    }
}

#[test]
fn resolves_a_forward_reference() {
    let ctx = generate(
        "type Query { world: World } \
         type World { name: String }",
    ).unwrap();

    let query = ctx.registry().object("Query").unwrap();
    assert_eq!(
        query.field("world").unwrap().type_ref,
        OutputTypeRef::Named("World".to_string()),
    );
    assert!(ctx.registry().object("World").is_some());
}

#[test]
fn resolution_is_declaration_order_independent() {
    let forward = generate(
        "type Query { world: World } \
         type World { name: String }",
    ).unwrap();
    let backward = generate(
        "type World { name: String } \
         type Query { world: World }",
    ).unwrap();

    assert_eq!(forward.registry(), backward.registry());
}

#[test]
fn resolves_a_self_referencing_type() {
    let ctx = generate("type Query { me: Query }").unwrap();
    assert_eq!(
        ctx.registry().object("Query").unwrap()
            .field("me").unwrap()
            .type_ref,
        OutputTypeRef::Named("Query".to_string()),
    );
}

#[test]
fn resolves_mutually_referencing_types() {
    let ctx = generate(
        "type Author { books: [Book] } \
         type Book { author: Author }",
    ).unwrap();

    assert_eq!(
        ctx.registry().object("Author").unwrap()
            .field("books").unwrap()
            .type_ref,
        OutputTypeRef::List(Box::new(
            OutputTypeRef::Named("Book".to_string()),
        )),
    );
    assert_eq!(
        ctx.registry().object("Book").unwrap()
            .field("author").unwrap()
            .type_ref,
        OutputTypeRef::Named("Author".to_string()),
    );
}

#[test]
fn enum_ordinals_follow_declaration_order() {
    let ctx = generate("enum Hello { WORLD HERE }").unwrap();

    let enum_type = ctx.registry().enum_type("Hello").unwrap();
    assert_eq!(enum_type.value("WORLD").unwrap().ordinal, 0);
    assert_eq!(enum_type.value("HERE").unwrap().ordinal, 1);
}

#[test]
fn extension_adds_fields_to_the_target_object() {
    let ctx = generate(
        "type Hello { test: Boolean } \
         extend type Hello { world: String }",
    ).unwrap();

    let hello = ctx.registry().object("Hello").unwrap();
    assert_eq!(hello.fields.len(), 2);
    assert_eq!(
        hello.field("world").unwrap().type_ref,
        OutputTypeRef::Builtin(BuiltinScalar::String),
    );
}

#[test]
fn last_applied_extension_wins_on_a_field_collision() {
    let ctx = generate(
        "type Hello { test: Boolean } \
         extend type Hello { test: String }",
    ).unwrap();

    assert_eq!(
        ctx.registry().object("Hello").unwrap()
            .field("test").unwrap()
            .type_ref,
        OutputTypeRef::Builtin(BuiltinScalar::String),
    );
}

#[test]
fn extension_may_precede_its_target_declaration() {
    let ctx = generate(
        "extend type Hello { world: String } \
         type Hello { test: Boolean }",
    ).unwrap();

    assert_eq!(ctx.registry().object("Hello").unwrap().fields.len(), 2);
}

#[test]
fn extension_fields_may_reference_other_declared_types() {
    let ctx = generate(
        "type Hello { test: Boolean } \
         extend type Hello { other: Other } \
         type Other { name: String }",
    ).unwrap();

    assert_eq!(
        ctx.registry().object("Hello").unwrap()
            .field("other").unwrap()
            .type_ref,
        OutputTypeRef::Named("Other".to_string()),
    );
}

#[test]
fn object_records_implemented_interfaces_in_order() {
    let ctx = generate(
        "interface World { name: String } \
         interface Balloon { size: Int } \
         type Oncle implements World & Balloon { \
           name: String \
           size: Int \
         }",
    ).unwrap();

    assert_eq!(
        ctx.registry().object("Oncle").unwrap().interfaces,
        vec!["World".to_string(), "Balloon".to_string()],
    );
}

#[test]
fn union_records_members_in_order() {
    let ctx = generate(
        "type Dog { barks: Boolean } \
         type Cat { purrs: Boolean } \
         union Pet = Dog | Cat",
    ).unwrap();

    assert_eq!(
        ctx.registry().union("Pet").unwrap().members,
        vec!["Dog".to_string(), "Cat".to_string()],
    );
}

#[test]
fn custom_scalar_names_resolve_as_references() {
    let ctx = generate(
        "scalar DateTime \
         type Query { at: DateTime }",
    ).unwrap();

    assert!(ctx.registry().scalar("DateTime").is_some());
    assert_eq!(
        ctx.registry().object("Query").unwrap()
            .field("at").unwrap()
            .type_ref,
        OutputTypeRef::Named("DateTime".to_string()),
    );
}

#[test]
fn input_object_field_defaults_are_resolved() {
    let ctx = generate("input Filter { limit: Int = 10 }").unwrap();

    assert_eq!(
        ctx.registry().input_object("Filter").unwrap()
            .field("limit").unwrap()
            .default_value,
        Some(Value::Int(10)),
    );
}

#[test]
fn argument_defaults_are_resolved() {
    let ctx = generate(
        "type Query { greet(name: String = \"world\"): String }",
    ).unwrap();

    assert_eq!(
        ctx.registry().object("Query").unwrap()
            .field("greet").unwrap()
            .argument("name").unwrap()
            .default_value,
        Some(Value::String("world".to_string())),
    );
}

#[test]
fn unresolved_reference_reports_the_missing_name() {
    let err = generate("type Hello { world: Nope }").unwrap_err();

    assert_eq!(declaration_errors(err), vec![DeclarationError::Unresolved {
        name: "Hello".to_string(),
        missing: vec!["Nope".to_string()],
    }]);
}

#[test]
fn duplicate_type_name_is_fatal() {
    let err = generate(
        "type Hello { test: Boolean } \
         enum Hello { WORLD }",
    ).unwrap_err();

    let errors = declaration_errors(err);
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        DeclarationError::DuplicateTypeName { name, .. } if name == "Hello",
    ));
}

#[test]
fn duplicate_enum_value_is_fatal() {
    let err = generate("enum Hello { WORLD WORLD }").unwrap_err();

    let errors = declaration_errors(err);
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        DeclarationError::DuplicateEnumValueDefinition {
            type_name,
            value_name,
            ..
        } if type_name == "Hello" && value_name == "WORLD",
    ));
}

#[test]
fn implementing_a_non_interface_type_is_fatal() {
    let err = generate(
        "enum Color { RED } \
         type Hello implements Color { test: Boolean }",
    ).unwrap_err();

    let errors = declaration_errors(err);
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        DeclarationError::IncompatibleInterface {
            type_name,
            interface_name,
            actual: TypeKind::Enum,
            ..
        } if type_name == "Hello" && interface_name == "Color",
    ));
}

#[test]
fn duplicate_implements_declaration_is_fatal() {
    let err = generate(
        "interface World { name: String } \
         type Hello implements World & World { name: String }",
    ).unwrap_err();

    let errors = declaration_errors(err);
    assert!(matches!(
        &errors[0],
        DeclarationError::DuplicateInterfaceImplementsDeclaration {
            type_name,
            interface_name,
            ..
        } if type_name == "Hello" && interface_name == "World",
    ));
}

#[test]
fn non_object_union_member_is_fatal() {
    let err = generate(
        "enum Color { RED } \
         union Mixed = Color",
    ).unwrap_err();

    let errors = declaration_errors(err);
    assert!(matches!(
        &errors[0],
        DeclarationError::IncompatibleUnionMember {
            union_name,
            member_name,
            actual: TypeKind::Enum,
            ..
        } if union_name == "Mixed" && member_name == "Color",
    ));
}

#[test]
fn extending_a_non_object_type_is_fatal() {
    let err = generate(
        "enum Color { RED } \
         extend type Color { test: Boolean }",
    ).unwrap_err();

    let errors = declaration_errors(err);
    assert!(matches!(
        &errors[0],
        DeclarationError::ExtensionOfNonObjectType {
            target,
            actual: TypeKind::Enum,
            ..
        } if target == "Color",
    ));
}

#[test]
fn non_object_extension_syntax_is_rejected() {
    let err = generate(
        "enum Color { RED } \
         extend enum Color { BLUE }",
    ).unwrap_err();

    let errors = declaration_errors(err);
    assert!(matches!(
        &errors[0],
        DeclarationError::UnsupportedExtension {
            target,
            kind: TypeKind::Enum,
            ..
        } if target == "Color",
    ));
}

#[test]
fn malformed_argument_default_is_fatal() {
    let err = generate(
        "type Query { greet(count: Int = \"ten\"): String }",
    ).unwrap_err();

    let errors = declaration_errors(err);
    assert!(matches!(
        &errors[0],
        DeclarationError::MalformedDefaultValue {
            type_name,
            field_name,
            ..
        } if type_name == "Query" && field_name == "greet.count",
    ));
}

#[test]
fn fatal_errors_are_accumulated_across_declarations() {
    let err = generate(
        "enum Color { RED } \
         union Mixed = Color \
         type Hello { world: Nope }",
    ).unwrap_err();

    let errors = declaration_errors(err);
    assert_eq!(errors.len(), 2);
    assert!(matches!(
        &errors[0],
        DeclarationError::IncompatibleUnionMember { .. },
    ));
    assert!(matches!(&errors[1], DeclarationError::Unresolved { .. }));
}

#[test]
fn a_second_schema_block_is_rejected() {
    let err = generate(
        "schema { query: Root } \
         schema { query: Root } \
         type Root { test: Boolean }",
    ).unwrap_err();

    assert!(matches!(err, GenerateError::DuplicateSchemaBlock { .. }));
}

#[test]
fn unparseable_documents_are_rejected() {
    let err = generate("type {{{").unwrap_err();
    assert!(matches!(err, GenerateError::ParseError { .. }));
}
