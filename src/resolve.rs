use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// The opaque resolution-parameters structure handed to a field resolver at
/// execution time.
#[derive(Debug)]
pub struct ResolveParams<'a> {
    /// The value the enclosing selection set resolved to, if any.
    pub parent: Option<&'a serde_json::Value>,
    /// Field arguments: declared defaults overlaid with the literal arguments
    /// supplied by the query.
    pub args: IndexMap<String, serde_json::Value>,
}
impl ResolveParams<'_> {
    pub fn arg(&self, name: &str) -> Option<&serde_json::Value> {
        self.args.get(name)
    }
}

/// Error returned by a field-resolver callback.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct ResolveError {
    pub message: String,
}
impl ResolveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type ResolverFn =
    dyn Fn(ResolveParams<'_>) -> Result<serde_json::Value, ResolveError>
        + Send
        + Sync;

/// A runtime field-resolution callback, attached to an already-resolved field
/// through the mutation cursor.
#[derive(Clone)]
pub struct FieldResolver(Arc<ResolverFn>);
impl FieldResolver {
    pub fn new<F>(resolver: F) -> Self
    where
        F: Fn(ResolveParams<'_>) -> Result<serde_json::Value, ResolveError>
            + Send
            + Sync
            + 'static,
    {
        Self(Arc::new(resolver))
    }

    pub fn call(
        &self,
        params: ResolveParams<'_>,
    ) -> Result<serde_json::Value, ResolveError> {
        (self.0)(params)
    }
}
impl fmt::Debug for FieldResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldResolver(..)")
    }
}
impl PartialEq for FieldResolver {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
