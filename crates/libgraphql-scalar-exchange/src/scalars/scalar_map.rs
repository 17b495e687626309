use serde_json::Value;
use std::sync::Arc;

/// A pure, total function from one wire-level JSON value to another.
pub type ScalarFn = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// The pair of functions which convert a custom scalar between its
/// application-side representation and its wire representation.
///
/// Neither function is ever invoked with `null`, so implementations need not
/// check for it.
#[derive(Clone)]
pub struct ScalarMap {
    deserialize: ScalarFn,
    serialize: ScalarFn,
}
impl ScalarMap {
    /// Converts a wire value (as found in response `data`) into its
    /// application-side representation.
    pub fn deserialize(&self, value: Value) -> Value {
        (self.deserialize)(value)
    }

    /// A [`ScalarMap`] which only rewrites response data. Variables pass
    /// through unchanged.
    pub fn deserialize_only<D>(deserialize: D) -> Self
    where
        D: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self::new(|value| value, deserialize)
    }

    pub fn new<S, D>(serialize: S, deserialize: D) -> Self
    where
        S: Fn(Value) -> Value + Send + Sync + 'static,
        D: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self {
            deserialize: Arc::new(deserialize),
            serialize: Arc::new(serialize),
        }
    }

    /// Converts an application-side value (as found in operation variables)
    /// into its wire representation.
    pub fn serialize(&self, value: Value) -> Value {
        (self.serialize)(value)
    }

    /// A [`ScalarMap`] which only rewrites operation variables. Response data
    /// passes through unchanged.
    pub fn serialize_only<S>(serialize: S) -> Self
    where
        S: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self::new(serialize, |value| value)
    }
}
impl std::fmt::Debug for ScalarMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarMap").finish_non_exhaustive()
    }
}
