use crate::ast;
use crate::generate::BuildFailure;
use crate::generate::DeclaredNames;
use crate::types::BuiltinScalar;
use crate::types::OutputTypeRef;

fn named(name: &str) -> ast::schema::Type {
    ast::schema::Type::NamedType(name.to_string())
}

fn declared(names: &[&str]) -> DeclaredNames {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn maps_builtin_primitives() {
    let declared = declared(&[]);
    let cases = [
        ("Boolean", BuiltinScalar::Boolean),
        ("Float", BuiltinScalar::Float),
        ("ID", BuiltinScalar::ID),
        ("Int", BuiltinScalar::Int),
        ("String", BuiltinScalar::String),
    ];
    for (name, expected) in cases {
        assert_eq!(
            OutputTypeRef::from_ast(&declared, &named(name)).unwrap(),
            OutputTypeRef::Builtin(expected),
        );
    }
}

#[test]
fn unwraps_nonnull_and_list_wrappers() {
    let declared = declared(&[]);
    let ast_type = ast::schema::Type::NonNullType(Box::new(
        ast::schema::Type::ListType(Box::new(named("String"))),
    ));
    assert_eq!(
        OutputTypeRef::from_ast(&declared, &ast_type).unwrap(),
        OutputTypeRef::NonNull(Box::new(OutputTypeRef::List(Box::new(
            OutputTypeRef::Builtin(BuiltinScalar::String),
        )))),
    );
}

#[test]
fn declared_names_map_to_named_references() {
    let declared = declared(&["DateTime"]);
    assert_eq!(
        OutputTypeRef::from_ast(&declared, &named("DateTime")).unwrap(),
        OutputTypeRef::Named("DateTime".to_string()),
    );
}

#[test]
fn declared_names_resolve_before_they_are_materialized() {
    // Declaration suffices; no registry entry exists for either name yet.
    // Mutually referencing declarations depend on this.
    let declared = declared(&["Author", "Book"]);
    assert_eq!(
        OutputTypeRef::from_ast(&declared, &named("Book")).unwrap(),
        OutputTypeRef::Named("Book".to_string()),
    );
}

#[test]
fn undeclared_name_is_a_pending_dependency() {
    let declared = declared(&["Author"]);
    match OutputTypeRef::from_ast(&declared, &named("Nope")) {
        Err(BuildFailure::Pending { missing }) =>
            assert_eq!(missing, vec!["Nope".to_string()]),
        other => panic!("expected a pending dependency, got {other:?}"),
    }
}

#[test]
fn wrapped_references_fail_on_an_undeclared_base_name() {
    let declared = declared(&[]);
    let ast_type = ast::schema::Type::ListType(Box::new(named("Nope")));
    assert!(matches!(
        OutputTypeRef::from_ast(&declared, &ast_type),
        Err(BuildFailure::Pending { .. }),
    ));
}
