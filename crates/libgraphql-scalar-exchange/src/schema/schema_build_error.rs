use crate::OperationKind;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple fields named `{field_name}` were defined on the `{type_name}` type")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
    },

    #[error("Multiple root type definitions were given for the {operation} operation")]
    DuplicateOperationDefinition {
        operation: OperationKind,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("Attempted to extend `{type_name}`, but no type by that name has been defined")]
    ExtensionOfUndefinedType {
        type_name: String,
    },

    #[error("Error parsing introspection JSON: {err}")]
    IntrospectionJsonError {
        err: String,
    },

    #[error(
        "Attempted to extend `{type_name}` as a(n) {expected_kind} type, but \
        it was defined as a(n) {found_kind} type"
    )]
    InvalidExtensionType {
        type_name: String,
        expected_kind: GraphQLTypeKind,
        found_kind: GraphQLTypeKind,
    },

    #[error("Type names starting with `__` are reserved for introspection: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        type_name: String,
    },

    #[error(
        "The `{union_name}` union lists `{member_name}` as a member, but it \
        is a(n) {member_kind} type rather than an object type"
    )]
    InvalidUnionMemberType {
        union_name: String,
        member_name: String,
        member_kind: GraphQLTypeKind,
    },

    #[error(
        "The introspection type reference at `{type_name}.{member_name}` is \
        a list or non-null wrapper without an `ofType`"
    )]
    MalformedIntrospectionTypeRef {
        type_name: String,
        member_name: String,
    },

    #[error("No query root type was defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema SDL: {err}")]
    ParseError {
        err: String,
    },

    #[error(
        "The {operation} root type `{type_name}` is a(n) {kind} type rather \
        than an object type"
    )]
    RootOperationTypeNotObject {
        operation: OperationKind,
        type_name: String,
        kind: GraphQLTypeKind,
    },

    #[error("The {operation} root type `{type_name}` is not defined")]
    UndefinedRootOperationType {
        operation: OperationKind,
        type_name: String,
    },

    #[error(
        "`{referencing_type}{}` references the undefined type `{type_name}`",
        format_member_name(.member_name)
    )]
    UndefinedTypeReference {
        referencing_type: String,
        member_name: Option<String>,
        type_name: String,
    },
}

fn format_member_name(member_name: &Option<String>) -> String {
    member_name.as_ref()
        .map(|name| format!(".{name}"))
        .unwrap_or_default()
}
