use crate::exchange::ScalarExchange;
use crate::scalars::ScalarMap;
use crate::scalars::ScalarRegistry;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLTypeKind;
use std::sync::Arc;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ScalarExchangeBuildError {
    #[error("No schema was provided to the ScalarExchangeBuilder")]
    MissingSchema,

    #[error("Failed to build the schema: {0}")]
    SchemaBuild(#[from] SchemaBuildError),
}

#[derive(Debug)]
enum SchemaSource {
    Built(Arc<Schema>),
    IntrospectionJson(String),
    Sdl(String),
}

/// Utility for configuring and building a [`ScalarExchange`].
///
/// The schema may be given pre-built or as source text. Source text is only
/// parsed by [`build()`](Self::build), so any [`SchemaBuildError`] surfaces
/// there.
#[derive(Debug, Default)]
pub struct ScalarExchangeBuilder {
    scalars: ScalarRegistry,
    schema: Option<SchemaSource>,
}
impl ScalarExchangeBuilder {
    pub fn build(self) -> Result<ScalarExchange, ScalarExchangeBuildError> {
        let schema = match self.schema {
            None => return Err(ScalarExchangeBuildError::MissingSchema),
            Some(SchemaSource::Built(schema)) => schema,
            Some(SchemaSource::IntrospectionJson(json)) =>
                Arc::new(SchemaBuilder::from_introspection_json(&json)?.build()?),
            Some(SchemaSource::Sdl(sdl)) =>
                Arc::new(SchemaBuilder::from_sdl_str(&sdl)?.build()?),
        };

        for scalar_name in self.scalars.scalar_names() {
            match schema.lookup_type(scalar_name) {
                Some(type_) if type_.is_scalar() => (),
                Some(type_) => log::warn!(
                    "`{scalar_name}` is registered as a scalar but the schema \
                    defines it as a(n) {} type; it will never be mapped",
                    GraphQLTypeKind::from(type_),
                ),
                None => log::warn!(
                    "`{scalar_name}` is registered as a scalar but the schema \
                    does not define it",
                ),
            }
        }

        Ok(ScalarExchange {
            scalars: Arc::new(self.scalars),
            schema,
        })
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the [`ScalarMap`] used for the scalar named `scalar_name`,
    /// replacing any earlier registration of that name.
    pub fn scalar(
        mut self,
        scalar_name: impl Into<String>,
        scalar_map: ScalarMap,
    ) -> Self {
        self.scalars.insert(scalar_name, scalar_map);
        self
    }

    /// Adds every registration from `scalars`, replacing earlier
    /// registrations of the same names.
    pub fn scalars(mut self, scalars: ScalarRegistry) -> Self {
        for (scalar_name, scalar_map) in scalars {
            self.scalars.insert(scalar_name, scalar_map);
        }
        self
    }

    pub fn schema(self, schema: Schema) -> Self {
        self.schema_arc(Arc::new(schema))
    }

    pub fn schema_arc(mut self, schema: Arc<Schema>) -> Self {
        self.schema = Some(SchemaSource::Built(schema));
        self
    }

    /// Uses the schema described by the JSON result of an introspection
    /// query (either the bare `{"__schema": ...}` object or a full response
    /// wrapping it in `data`).
    pub fn schema_introspection_json(mut self, json: impl Into<String>) -> Self {
        self.schema = Some(SchemaSource::IntrospectionJson(json.into()));
        self
    }

    /// Uses the schema described by the given SDL document.
    pub fn schema_sdl(mut self, sdl: impl Into<String>) -> Self {
        self.schema = Some(SchemaSource::Sdl(sdl.into()));
        self
    }
}
