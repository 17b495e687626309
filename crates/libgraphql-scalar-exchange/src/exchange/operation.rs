use crate::ast;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use thiserror::Error;

static NEXT_OPERATION_KEY: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Error)]
pub enum OperationParseError {
    #[error("Error parsing operation document: {0}")]
    ParseError(#[from] ast::query::ParseError),
}

/// An outbound GraphQL request: a parsed query document plus the variables
/// to execute it with.
///
/// Every [`Operation`] is assigned a process-unique [`key`](Self::key) which
/// is carried (unchanged) through [`Exchange`](crate::exchange::Exchange)
/// stages and into the [`OperationResult`](crate::exchange::OperationResult)
/// produced for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    key: u64,
    operation_name: Option<String>,
    query: Arc<ast::query::Document>,
    variables: Value,
}
impl Operation {
    /// Parses `query` and pairs it with `variables`.
    pub fn from_str(
        query: impl AsRef<str>,
        variables: Value,
    ) -> Result<Self, OperationParseError> {
        Ok(Self::new(Arc::new(ast::query::parse(query.as_ref())?), variables))
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn new(query: Arc<ast::query::Document>, variables: Value) -> Self {
        Self {
            key: NEXT_OPERATION_KEY.fetch_add(1, Ordering::Relaxed),
            operation_name: None,
            query,
            variables,
        }
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn query(&self) -> &ast::query::Document {
        &self.query
    }

    pub fn variables(&self) -> &Value {
        &self.variables
    }

    /// Selects which operation of a multi-operation document to execute.
    ///
    /// The name is carried along for the transport only. Scalar mapping still
    /// covers the variables and selections of every operation in the document.
    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    /// Replaces this operation's variables, keeping its key.
    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = variables;
        self
    }

    pub(crate) fn take_variables(&mut self) -> Value {
        self.variables.take()
    }
}
