/// Represents a custom GraphQL
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars). The
/// built-in scalars are represented by their own
/// [`GraphQLType`](crate::types::GraphQLType) variants instead.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) name: String,
    pub(crate) specified_by_url: Option<String>,
}
impl ScalarType {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The URL given by a `@specifiedBy` annotation (or by the
    /// `specifiedByURL` introspection field), if any.
    pub fn specified_by_url(&self) -> Option<&str> {
        self.specified_by_url.as_deref()
    }
}
