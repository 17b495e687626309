use crate::ast;
use crate::collect::ScalarPath;
use crate::collect::collect_response_paths;
use crate::collect::collect_variable_paths;
use crate::exchange::Exchange;
use crate::exchange::Operation;
use crate::exchange::OperationResult;
use crate::exchange::ScalarExchangeBuilder;
use crate::path::FragmentPathError;
use crate::path::patch_value;
use crate::scalars::ScalarMap;
use crate::scalars::ScalarRegistry;
use crate::schema::Schema;
use inherent::inherent;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, ScalarExchangeError>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ScalarExchangeError {
    #[error("Unable to locate response scalars: {0}")]
    FragmentPath(#[from] FragmentPathError),
}

/// An [`Exchange`] which serializes registered scalars found in outbound
/// variables and deserializes registered scalars found in inbound response
/// data.
///
/// Cloning is cheap: the [`Schema`] and [`ScalarRegistry`] are shared.
#[derive(Clone, Debug)]
pub struct ScalarExchange {
    pub(crate) scalars: Arc<ScalarRegistry>,
    pub(crate) schema: Arc<Schema>,
}
impl ScalarExchange {
    /// Helper function that just delegates to [`ScalarExchangeBuilder::new()`].
    pub fn builder() -> ScalarExchangeBuilder {
        ScalarExchangeBuilder::new()
    }

    /// Lists the response data positions (and their scalar types) which
    /// [`map_result()`](Self::map_result) would deserialize for results of
    /// `document`.
    pub fn response_paths(
        &self,
        document: &ast::query::Document,
    ) -> Result<Vec<ScalarPath>> {
        Ok(collect_response_paths(document, &self.schema, &self.scalars).resolve()?)
    }

    pub fn scalars(&self) -> &ScalarRegistry {
        &self.scalars
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Lists the variable positions (and their scalar types) which
    /// [`map_operation()`](Self::map_operation) would serialize for
    /// `operation`.
    pub fn variable_paths(&self, operation: &Operation) -> Vec<ScalarPath> {
        collect_variable_paths(operation.query(), &self.schema, &self.scalars)
    }

    fn apply(
        &self,
        root: Value,
        paths: &[ScalarPath],
        transform: impl Fn(&ScalarMap, Value) -> Value,
    ) -> Value {
        paths.iter().fold(root, |root, scalar_path| {
            // Collectors only emit paths for registered scalars.
            let scalar_map = self.scalars.get(&scalar_path.scalar_name)
                .expect("scalar is present in registry");
            log::trace!(
                "mapping `{}` values at `{}`",
                scalar_path.scalar_name,
                scalar_path.path,
            );
            patch_value(
                root,
                scalar_path.path.segments(),
                &|value| transform(scalar_map, value),
            )
        })
    }
}

#[inherent]
impl Exchange for ScalarExchange {
    type Error = ScalarExchangeError;

    /// Replaces the operation's variables with a copy in which every value of
    /// a registered scalar type has been passed through that scalar's
    /// [`ScalarMap::serialize()`] function.
    pub fn map_operation(&self, mut operation: Operation) -> Operation {
        if operation.variables().is_null() {
            return operation;
        }

        let paths = self.variable_paths(&operation);
        if paths.is_empty() {
            return operation;
        }

        let variables = self.apply(
            operation.take_variables(),
            &paths,
            |scalar_map, value| scalar_map.serialize(value),
        );
        operation.with_variables(variables)
    }

    /// Replaces the result's data with a copy in which every value of a
    /// registered scalar type has been passed through that scalar's
    /// [`ScalarMap::deserialize()`] function.
    ///
    /// Results without data (or with `null` data) are returned as-is.
    pub fn map_result(&self, mut result: OperationResult) -> Result<OperationResult> {
        match result.data() {
            None | Some(Value::Null) => {
                log::debug!(
                    "result for operation {} has no data to map",
                    result.operation().key(),
                );
                return Ok(result);
            },
            Some(_) => (),
        }

        let paths = self.response_paths(result.operation().query())?;
        if let Some(data) = result.take_data() {
            result.set_data(self.apply(data, &paths, |scalar_map, value| {
                scalar_map.deserialize(value)
            }));
        }
        Ok(result)
    }
}
