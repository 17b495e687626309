mod enum_type;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod list_type_annotation;
mod named_type_annotation;
mod object_type;
mod scalar_type;
mod type_annotation;
mod types_map_builder;
mod union_type;

pub use enum_type::EnumType;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputField;
pub use input_object_type::InputObjectType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub use object_type::Field;
pub use object_type::InterfaceType;
pub use object_type::ObjectType;
pub(crate) use object_type::ObjectOrInterfaceTypeData;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;

use crate::named_ref::NamedRef;
use crate::schema::Schema;

pub(crate) type NamedGraphQLTypeRef = NamedRef<Schema, GraphQLType>;

#[cfg(test)]
mod tests;
