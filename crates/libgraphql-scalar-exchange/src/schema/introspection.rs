//! Serde models of the result of the standard GraphQL introspection query.
//!
//! Only the parts of the introspection schema needed to type operations are
//! modeled; unknown keys (descriptions, deprecation info, directives, etc)
//! are ignored during deserialization.

use serde::Deserialize;

/// The `data` of an introspection query response.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct IntrospectionQuery {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

/// Either a bare [`IntrospectionQuery`] or a full GraphQL response wrapping
/// one in `data`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub(crate) enum IntrospectionDocument {
    Response { data: IntrospectionQuery },
    Bare(IntrospectionQuery),
}
impl IntrospectionDocument {
    pub(crate) fn into_query(self) -> IntrospectionQuery {
        match self {
            Self::Response { data } => data,
            Self::Bare(query) => query,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    pub query_type: Option<IntrospectionNamedRef>,
    pub mutation_type: Option<IntrospectionNamedRef>,
    pub subscription_type: Option<IntrospectionNamedRef>,
    pub types: Vec<IntrospectionType>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct IntrospectionNamedRef {
    pub name: String,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntrospectionTypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    NonNull,
    Object,
    Scalar,
    Union,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionType {
    pub kind: IntrospectionTypeKind,
    pub name: String,
    pub fields: Option<Vec<IntrospectionField>>,
    pub input_fields: Option<Vec<IntrospectionInputValue>>,
    pub interfaces: Option<Vec<IntrospectionNamedRef>>,
    pub possible_types: Option<Vec<IntrospectionNamedRef>>,
    pub enum_values: Option<Vec<IntrospectionEnumValue>>,
    #[serde(rename = "specifiedByURL")]
    pub specified_by_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct IntrospectionField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRef,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct IntrospectionInputValue {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRef,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct IntrospectionEnumValue {
    pub name: String,
}

/// A (possibly wrapped) reference to a type. `LIST` and `NON_NULL` wrappers
/// carry the wrapped type in `ofType`; named kinds carry a `name`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionTypeRef {
    pub kind: IntrospectionTypeKind,
    pub name: Option<String>,
    pub of_type: Option<Box<IntrospectionTypeRef>>,
}
