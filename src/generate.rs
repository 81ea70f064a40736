use crate::ast;
use crate::cursor::Cursor;
use crate::registry::TypeRegistry;
use crate::schema::Schema;
use crate::types::EnumConfig;
use crate::types::EnumType;
use crate::types::InputObjectConfig;
use crate::types::InputObjectType;
use crate::types::InterfaceConfig;
use crate::types::InterfaceType;
use crate::types::ObjectConfig;
use crate::types::ObjectType;
use crate::types::ResolvedType;
use crate::types::ScalarConfig;
use crate::types::ScalarType;
use crate::types::TypeConfig;
use crate::types::TypeKind;
use crate::types::UnionConfig;
use crate::types::UnionType;
use crate::types::fields_from_ast;
use log::debug;
use log::trace;
use std::collections::HashSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, GenerateError>;

/// Parses an SDL document and resolves it into a [`Context`].
///
/// Convenience wrapper over [`generate_document`] for callers holding source
/// text rather than a pre-parsed document.
pub fn generate(sdl: &str) -> Result<Context> {
    let doc = graphql_parser::schema::parse_schema::<String>(sdl)
        .map_err(|err| GenerateError::ParseError {
            err: err.to_string(),
        })?
        .into_static();
    generate_document(doc)
}

/// Resolves a pre-parsed SDL document into a [`Context`]: the registry of
/// fully resolved types plus any root-operation selections from a `schema`
/// block.
///
/// Declarations may reference each other in any order; resolution repeatedly
/// scans the declaration list in document order until a full pass makes no
/// progress. A declaration whose references never materialize is reported,
/// with the missing names, in [`GenerateError::FailedDeclarations`] rather
/// than silently discarded.
pub fn generate_document(doc: ast::schema::Document) -> Result<Context> {
    let mut roots = RootTypes::default();
    let mut schema_block_seen = false;
    let mut decls = vec![];

    for def in doc.definitions {
        match def {
            ast::schema::Definition::SchemaDefinition(schema_def) => {
                if schema_block_seen {
                    return Err(GenerateError::DuplicateSchemaBlock {
                        position: schema_def.position,
                    });
                }
                schema_block_seen = true;
                roots = RootTypes {
                    query: schema_def.query,
                    mutation: schema_def.mutation,
                    subscription: schema_def.subscription,
                };
            },

            ast::schema::Definition::TypeDefinition(type_def) =>
                decls.push(Declaration::Type(type_def)),

            ast::schema::Definition::TypeExtension(ext) =>
                decls.push(match ext {
                    ast::schema::TypeExtension::Object(obj_ext) =>
                        Declaration::Extend(obj_ext),
                    other =>
                        Declaration::UnsupportedExtension(
                            unsupported_extension_error(&other),
                        ),
                }),

            // Directive semantics are out of scope.
            ast::schema::Definition::DirectiveDefinition(directive_def) =>
                trace!(
                    "skipping directive definition `{}`",
                    directive_def.name,
                ),
        }
    }

    let registry = resolve_declarations(&decls)?;
    Ok(Context {
        registry,
        roots,
    })
}

/// The fixed-point loop. Each still-pending declaration is attempted once per
/// pass; the loop stops on the first pass that transitions no declaration.
fn resolve_declarations(decls: &[Declaration]) -> Result<TypeRegistry> {
    let declared = DeclaredNames::collect(decls);
    let mut registry = TypeRegistry::new();
    let mut status: Vec<DeclStatus> = decls.iter()
        .map(|_| DeclStatus::Pending {
            missing: vec![],
        })
        .collect();
    let mut errors = vec![];

    let mut pass = 0usize;
    loop {
        pass += 1;
        let mut progressed = false;

        for (index, decl) in decls.iter().enumerate() {
            if !matches!(status[index], DeclStatus::Pending { .. }) {
                continue;
            }
            match build_declaration(&mut registry, &declared, decl) {
                Ok(()) => {
                    trace!(
                        "resolved `{}` on pass {pass}",
                        decl.subject_name(),
                    );
                    status[index] = DeclStatus::Resolved;
                    progressed = true;
                },
                Err(BuildFailure::Pending { missing }) => {
                    trace!(
                        "`{}` still pending on pass {pass} (missing: {})",
                        decl.subject_name(),
                        missing.join(", "),
                    );
                    status[index] = DeclStatus::Pending {
                        missing,
                    };
                },
                Err(BuildFailure::Fatal(error)) => {
                    status[index] = DeclStatus::Failed;
                    errors.push(error);
                    progressed = true;
                },
            }
        }

        let pending = status.iter()
            .filter(|s| matches!(s, DeclStatus::Pending { .. }))
            .count();
        debug!("pass {pass}: {} resolved, {pending} pending", registry.len());

        if !progressed {
            break;
        }
    }

    for (index, decl_status) in status.iter().enumerate() {
        if let DeclStatus::Pending { missing } = decl_status {
            errors.push(DeclarationError::Unresolved {
                name: decls[index].subject_name().to_string(),
                missing: missing.clone(),
            });
        }
    }

    if !errors.is_empty() {
        return Err(GenerateError::FailedDeclarations {
            errors,
        });
    }
    Ok(registry)
}

/// Invokes the kind-appropriate definition builder for one declaration.
fn build_declaration(
    registry: &mut TypeRegistry,
    declared: &DeclaredNames,
    decl: &Declaration,
) -> std::result::Result<(), BuildFailure> {
    match decl {
        Declaration::Type(type_def) =>
            build_type_def(registry, declared, type_def),
        Declaration::Extend(ext) =>
            apply_object_extension(registry, declared, ext),
        Declaration::UnsupportedExtension(error) =>
            Err(error.clone().into()),
    }
}

fn build_type_def(
    registry: &mut TypeRegistry,
    declared: &DeclaredNames,
    type_def: &ast::schema::TypeDefinition,
) -> std::result::Result<(), BuildFailure> {
    use crate::ast::schema::TypeDefinition;
    match type_def {
        TypeDefinition::Enum(def) => {
            let config = EnumConfig::from_ast(def)?;
            registry.insert(
                &def.name,
                ResolvedType::Enum(EnumType::new(config.clone())),
                TypeConfig::Enum(config),
                def.position,
            )
        },

        TypeDefinition::InputObject(def) => {
            let config = InputObjectConfig::from_ast(declared, def)?;
            registry.insert(
                &def.name,
                ResolvedType::InputObject(InputObjectType::new(
                    config.clone(),
                )),
                TypeConfig::InputObject(config),
                def.position,
            )
        },

        TypeDefinition::Interface(def) => {
            let config = InterfaceConfig::from_ast(declared, def)?;
            registry.insert(
                &def.name,
                ResolvedType::Interface(InterfaceType::new(config.clone())),
                TypeConfig::Interface(config),
                def.position,
            )
        },

        TypeDefinition::Object(def) => {
            let config = ObjectConfig::from_ast(registry, declared, def)?;
            registry.insert(
                &def.name,
                ResolvedType::Object(ObjectType::new(config.clone())),
                TypeConfig::Object(config),
                def.position,
            )
        },

        TypeDefinition::Scalar(def) => {
            let config = ScalarConfig::from_ast(def);
            registry.insert(
                &def.name,
                ResolvedType::Scalar(ScalarType::new(config.clone())),
                TypeConfig::Scalar(config),
                def.position,
            )
        },

        TypeDefinition::Union(def) => {
            let config = UnionConfig::from_ast(registry, def)?;
            registry.insert(
                &def.name,
                ResolvedType::Union(UnionType::new(config.clone())),
                TypeConfig::Union(config),
                def.position,
            )
        },
    }
}

/// The extension applier. An `extend` declaration never occupies a registry
/// slot of its own: it waits (as a pending dependency) for its target object
/// to resolve, then merges its resolved fields into the target's live field
/// map. Last-applied extension wins on a field-name collision.
fn apply_object_extension(
    registry: &mut TypeRegistry,
    declared: &DeclaredNames,
    ext: &ast::schema::ObjectTypeExtension,
) -> std::result::Result<(), BuildFailure> {
    match registry.get(ext.name.as_str()) {
        None => return Err(BuildFailure::unknown_type(&ext.name)),
        Some(ResolvedType::Object(_)) => (),
        Some(other) =>
            return Err(DeclarationError::ExtensionOfNonObjectType {
                target: ext.name.to_string(),
                actual: other.kind(),
                position: ext.position,
            }.into()),
    }

    let fields = fields_from_ast(declared, &ext.name, &ext.fields)?;
    registry.extend_object(&ext.name, fields);
    Ok(())
}

fn unsupported_extension_error(
    ext: &ast::schema::TypeExtension,
) -> DeclarationError {
    use crate::ast::schema::TypeExtension;
    let (target, kind, position) = match ext {
        TypeExtension::Enum(e) =>
            (&e.name, TypeKind::Enum, e.position),
        TypeExtension::InputObject(e) =>
            (&e.name, TypeKind::InputObject, e.position),
        TypeExtension::Interface(e) =>
            (&e.name, TypeKind::Interface, e.position),
        TypeExtension::Scalar(e) =>
            (&e.name, TypeKind::Scalar, e.position),
        TypeExtension::Union(e) =>
            (&e.name, TypeKind::Union, e.position),
        // Object extensions are dispatched to the extension applier instead.
        TypeExtension::Object(e) =>
            (&e.name, TypeKind::Object, e.position),
    };
    DeclarationError::UnsupportedExtension {
        target: target.to_string(),
        kind,
        position,
    }
}

/// One top-level declaration participating in the fixed-point loop.
#[derive(Debug)]
enum Declaration {
    Type(ast::schema::TypeDefinition),
    Extend(ast::schema::ObjectTypeExtension),
    UnsupportedExtension(DeclarationError),
}
impl Declaration {
    /// The name this declaration is about: the declared type name, or the
    /// extension's target name.
    fn subject_name(&self) -> &str {
        use crate::ast::schema::TypeDefinition;
        match self {
            Declaration::Type(TypeDefinition::Enum(def)) => &def.name,
            Declaration::Type(TypeDefinition::InputObject(def)) => &def.name,
            Declaration::Type(TypeDefinition::Interface(def)) => &def.name,
            Declaration::Type(TypeDefinition::Object(def)) => &def.name,
            Declaration::Type(TypeDefinition::Scalar(def)) => &def.name,
            Declaration::Type(TypeDefinition::Union(def)) => &def.name,
            Declaration::Extend(ext) => &ext.name,
            Declaration::UnsupportedExtension(
                DeclarationError::UnsupportedExtension { target, .. },
            ) => target,
            Declaration::UnsupportedExtension(_) => "<extension>",
        }
    }
}

#[derive(Debug)]
enum DeclStatus {
    Pending { missing: Vec<String> },
    Resolved,
    Failed,
}

/// The set of type names declared anywhere in the document, gathered before
/// the first resolution pass.
///
/// Field, argument, and input-field type references are validated against
/// this set rather than against materialized registry entries: the reference
/// is stored as a name and dereferenced through the registry on use, so the
/// named declaration can materialize on any pass. Only references that need
/// a kind check (implemented interfaces, union members, extension targets)
/// wait for the registry entry itself.
#[derive(Debug, Default)]
pub(crate) struct DeclaredNames(HashSet<String>);
impl DeclaredNames {
    fn collect(decls: &[Declaration]) -> Self {
        decls.iter()
            .filter_map(|decl| match decl {
                Declaration::Type(_) =>
                    Some(decl.subject_name().to_string()),
                Declaration::Extend(_)
                    | Declaration::UnsupportedExtension(_) => None,
            })
            .collect()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}
impl FromIterator<String> for DeclaredNames {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Builder outcome classification, internal to the resolution engine.
///
/// `Pending` is the retry signal: a named reference is not in the registry
/// yet, so the engine re-attempts the declaration on a later pass. `Fatal`
/// failures surface on the pass in which they occur and are never retried.
#[derive(Debug)]
pub(crate) enum BuildFailure {
    Pending { missing: Vec<String> },
    Fatal(DeclarationError),
}
impl BuildFailure {
    pub(crate) fn unknown_type(name: &str) -> Self {
        Self::Pending {
            missing: vec![name.to_string()],
        }
    }
}
impl From<DeclarationError> for BuildFailure {
    fn from(error: DeclarationError) -> Self {
        Self::Fatal(error)
    }
}

/// A non-retryable failure recorded against a single declaration.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DeclarationError {
    #[error(
        "the `{type_name}` enum declares the value `{value_name}` more than \
        once"
    )]
    DuplicateEnumValueDefinition {
        type_name: String,
        value_name: String,
        position: ast::Pos,
    },

    #[error(
        "the `{type_name}` type declares that it implements the \
        `{interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        type_name: String,
        interface_name: String,
        position: ast::Pos,
    },

    #[error("multiple types were declared with the name `{name}`")]
    DuplicateTypeName {
        name: String,
        position: ast::Pos,
    },

    #[error("the `{type_name}` enum declares no values")]
    EnumWithNoValues {
        type_name: String,
        position: ast::Pos,
    },

    #[error(
        "`extend type {target}` targets a declared {actual} type, but only \
        object types can be extended"
    )]
    ExtensionOfNonObjectType {
        target: String,
        actual: TypeKind,
        position: ast::Pos,
    },

    #[error(
        "the `{type_name}` type implements `{interface_name}`, which is a \
        declared {actual} type rather than an interface"
    )]
    IncompatibleInterface {
        type_name: String,
        interface_name: String,
        actual: TypeKind,
        position: ast::Pos,
    },

    #[error(
        "the `{union_name}` union lists `{member_name}` as a member, but it \
        is a declared {actual} type rather than an object"
    )]
    IncompatibleUnionMember {
        union_name: String,
        member_name: String,
        actual: TypeKind,
        position: ast::Pos,
    },

    #[error(
        "the default value declared for `{type_name}.{field_name}` is \
        malformed: {detail}"
    )]
    MalformedDefaultValue {
        type_name: String,
        field_name: String,
        detail: String,
    },

    #[error("extensions of {kind} types are not supported (`{target}`)")]
    UnsupportedExtension {
        target: String,
        kind: TypeKind,
        position: ast::Pos,
    },

    #[error(
        "`{name}` references undeclared types: {}",
        missing.join(", "),
    )]
    Unresolved {
        name: String,
        missing: Vec<String>,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error("a schema document may only contain one schema block")]
    DuplicateSchemaBlock {
        position: ast::Pos,
    },

    #[error(
        "some declarations could not be resolved:\n{}",
        errors.iter()
            .map(|e| format!("  * {e}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    FailedDeclarations {
        errors: Vec<DeclarationError>,
    },

    #[error(
        "no object type named `{root_name}` is defined to serve as a root \
        operation type"
    )]
    MissingRootType {
        root_name: String,
    },

    #[error("error parsing schema document: {err}")]
    ParseError {
        err: String,
    },
}

/// Root-operation type names selected by a `schema` block, when present.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RootTypes {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
}

/// The finished build context: every declaration resolved into the registry,
/// ready for mutation through the [`Cursor`] and assembly into a [`Schema`].
#[derive(Debug)]
pub struct Context {
    pub(crate) registry: TypeRegistry,
    pub(crate) roots: RootTypes,
}
impl Context {
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// A mutation cursor over the registry. The `&mut` borrow serializes
    /// cursor mutation with any other access.
    pub fn cursor(&mut self) -> Cursor<'_> {
        Cursor::new(&mut self.registry)
    }

    /// Selects the root type and produces the queryable schema handle.
    pub fn into_schema(self) -> Result<Schema> {
        Schema::assemble(self)
    }
}
