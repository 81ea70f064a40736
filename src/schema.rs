use crate::cursor::Cursor;
use crate::generate::Context;
use crate::generate::GenerateError;
use crate::registry::TypeRegistry;
use crate::types::ObjectType;

type Result<T> = std::result::Result<T, GenerateError>;

/// A fully resolved, queryable schema handle, referencing the root object
/// type an execution engine starts from.
#[derive(Debug)]
pub struct Schema {
    pub(crate) query_type: String,
    pub(crate) mutation_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) registry: TypeRegistry,
}
impl Schema {
    /// Selects the root types from a finished [`Context`]. The query root is
    /// the type named by the document's `schema` block, or the object named
    /// `Query` by convention; its absence fails assembly. Mutation and
    /// subscription roots are optional.
    pub(crate) fn assemble(ctx: Context) -> Result<Self> {
        let query_type = ctx.roots.query
            .unwrap_or_else(|| "Query".to_string());
        if ctx.registry.object(&query_type).is_none() {
            return Err(GenerateError::MissingRootType {
                root_name: query_type,
            });
        }

        let mutation_type = resolve_optional_root(
            &ctx.registry,
            ctx.roots.mutation,
            "Mutation",
        )?;
        let subscription_type = resolve_optional_root(
            &ctx.registry,
            ctx.roots.subscription,
            "Subscription",
        )?;

        Ok(Self {
            query_type,
            mutation_type,
            subscription_type,
            registry: ctx.registry,
        })
    }

    /// The root query object type.
    pub fn query_type(&self) -> &ObjectType {
        self.registry.object(&self.query_type)
            .expect("root type is present in the registry")
    }

    /// The root mutation object type, if one is defined.
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type.as_deref()
            .map(|name| {
                self.registry.object(name)
                    .expect("root type is present in the registry")
            })
    }

    /// The root subscription object type, if one is defined.
    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription_type.as_deref()
            .map(|name| {
                self.registry.object(name)
                    .expect("root type is present in the registry")
            })
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// A mutation cursor over the assembled schema's registry. Mutation after
    /// assembly is serialized with read access by the exclusive `&mut`
    /// borrow.
    pub fn cursor(&mut self) -> Cursor<'_> {
        Cursor::new(&mut self.registry)
    }
}

/// An explicitly selected root must resolve to an object type; a defaulted
/// root name is used only when an object of that name exists.
fn resolve_optional_root(
    registry: &TypeRegistry,
    selected: Option<String>,
    default_name: &str,
) -> Result<Option<String>> {
    match selected {
        Some(name) => {
            if registry.object(&name).is_none() {
                return Err(GenerateError::MissingRootType {
                    root_name: name,
                });
            }
            Ok(Some(name))
        },
        None =>
            Ok(registry.object(default_name)
                .map(|_| default_name.to_string())),
    }
}
