use crate::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeAnnotation;
use std::collections::HashMap;
use std::sync::OnceLock;

fn typename_field_type() -> &'static TypeAnnotation {
    static TYPENAME_TYPE: OnceLock<TypeAnnotation> = OnceLock::new();
    TYPENAME_TYPE.get_or_init(|| TypeAnnotation::named("String", false))
}

/// Represents an immutable GraphQL schema whose type references have all been
/// checked to resolve.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Looks up the type of the field named `field_name` when selected on
    /// `parent_type`.
    ///
    /// `__typename` is selectable on every composite type and always has the
    /// type `String!`. Returns `None` for fields the parent type does not
    /// define (including introspection fields like `__schema`) and for
    /// non-composite parent types.
    pub fn field_type_annotation<'a>(
        &'a self,
        parent_type: &'a GraphQLType,
        field_name: &str,
    ) -> Option<&'a TypeAnnotation> {
        if field_name == "__typename" && parent_type.is_composite() {
            return Some(typename_field_type());
        }

        parent_type.field(field_name).map(|field| field.type_annotation())
    }

    /// Returns the type with the given name, if this [`Schema`] defines one.
    pub fn lookup_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref().map(|named_ref| {
            named_ref.deref(self)
                .expect("type is present in schema")
        })
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// [^note] The root type is not necessarily named `"Query"`: a
    /// [`schema { query: ... }`](https://spec.graphql.org/October2021/#RootOperationTypeDefinition)
    /// definition (or the `queryType` of an introspection result) may name a
    /// different object type, and this method factors that in.
    pub fn query_type(&self) -> &GraphQLType {
        self.query_type.deref(self)
            .expect("type is present in schema")
    }

    /// Strips any number of list/non-null wrapping layers from
    /// `type_annotation` and returns the named type underneath.
    pub fn resolve_annotation(
        &self,
        type_annotation: &TypeAnnotation,
    ) -> Option<&GraphQLType> {
        type_annotation.innermost_type(self)
    }

    /// Returns the root type which operations of the given kind are typed
    /// against.
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&GraphQLType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => Some(self.query_type()),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref().map(|named_ref| {
            named_ref.deref(self)
                .expect("type is present in schema")
        })
    }
}
