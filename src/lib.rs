//! Builds fully resolved, cross-referencing GraphQL type graphs from SDL
//! documents.
//!
//! Declarations may reference each other in any order (forward references,
//! mutual references through interfaces, self references); an iterative
//! fixed-point [`generate`] pass resolves them into a [`TypeRegistry`] of
//! concrete type nodes. After resolution, a fluent mutation
//! [`Cursor`](crate::Cursor) attaches runtime field resolvers or rebuilds a
//! type from an updated configuration, and [`Context::into_schema`] selects
//! the root type and produces a queryable [`Schema`].
//!
//! ```
//! use graphql_typegraph::generate;
//!
//! let mut ctx = generate("type Query { hello: String }")?;
//! ctx.cursor()
//!     .locate("Query")?
//!     .field("hello")?
//!     .resolve(|_params| Ok(serde_json::json!("world")));
//!
//! let schema = ctx.into_schema()?;
//! let response = graphql_typegraph::execute(&schema, "{ hello }")?;
//! assert_eq!(response, serde_json::json!({"data": {"hello": "world"}}));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ast;
mod cursor;
mod execute;
mod generate;
mod registry;
mod resolve;
mod schema;
pub mod types;
mod value;

pub use cursor::Cursor;
pub use cursor::FieldCursor;
pub use cursor::MutationError;
pub use cursor::TypeCursor;
pub use execute::ExecuteError;
pub use execute::execute;
pub use generate::Context;
pub use generate::DeclarationError;
pub use generate::GenerateError;
pub use generate::generate;
pub use generate::generate_document;
pub use registry::TypeRegistry;
pub use resolve::FieldResolver;
pub use resolve::ResolveError;
pub use resolve::ResolveParams;
pub use schema::Schema;
pub use value::Value;

#[cfg(test)]
mod tests;
