use crate::exchange::Operation;
use serde_json::Value;

/// The response to an [`Operation`].
///
/// `errors` and `extensions` are carried as opaque JSON and are never
/// touched by an [`Exchange`](crate::exchange::Exchange) stage.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationResult {
    data: Option<Value>,
    errors: Vec<Value>,
    extensions: Option<Value>,
    operation: Operation,
}
impl OperationResult {
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn errors(&self) -> &[Value] {
        &self.errors
    }

    pub fn extensions(&self) -> Option<&Value> {
        self.extensions.as_ref()
    }

    pub fn into_data(self) -> Option<Value> {
        self.data
    }

    pub fn new(operation: Operation, data: Option<Value>) -> Self {
        Self {
            data,
            errors: vec![],
            extensions: None,
            operation,
        }
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn with_errors(mut self, errors: Vec<Value>) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_extensions(mut self, extensions: Value) -> Self {
        self.extensions = Some(extensions);
        self
    }

    pub(crate) fn take_data(&mut self) -> Option<Value> {
        self.data.take()
    }

    pub(crate) fn set_data(&mut self, data: Value) {
        self.data = Some(data);
    }
}
