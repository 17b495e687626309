use crate::ast;
use crate::OperationKind;
use crate::schema::introspection::IntrospectionDocument;
use crate::schema::introspection::IntrospectionQuery;
use crate::schema::introspection::IntrospectionType;
use crate::schema::introspection::IntrospectionTypeKind;
use crate::schema::introspection::IntrospectionTypeRef;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`], either from the result of an
/// introspection query or from SDL.
///
/// ```
/// use libgraphql_scalar_exchange::schema::SchemaBuilder;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let schema = SchemaBuilder::from_sdl_str(
///     "scalar DateTime  type Query { now: DateTime! }",
/// )?.build()?;
///
/// assert_eq!(schema.query_type().name(), "Query");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type: Option<String>,
    query_type: Option<String>,
    subscription_type: Option<String>,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    pub fn build(self) -> Result<Schema> {
        let types = self.types_map_builder.into_types_map()?;

        let query_type = Self::resolve_root_type(
            &types,
            OperationKind::Query,
            self.query_type,
        )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;

        let mutation_type = Self::resolve_root_type(
            &types,
            OperationKind::Mutation,
            self.mutation_type,
        )?;

        let subscription_type = Self::resolve_root_type(
            &types,
            OperationKind::Subscription,
            self.subscription_type,
        )?;

        Ok(Schema {
            query_type,
            mutation_type,
            subscription_type,
            types,
        })
    }

    /// Shorthand for `SchemaBuilder::new().load_introspection(introspection)`.
    pub fn from_introspection(introspection: IntrospectionQuery) -> Result<Self> {
        Self::new().load_introspection(introspection)
    }

    /// Shorthand for `SchemaBuilder::new().load_introspection_json(json)`.
    pub fn from_introspection_json(json: &str) -> Result<Self> {
        Self::new().load_introspection_json(json)
    }

    /// Shorthand for `SchemaBuilder::new().load_sdl_str(content)`.
    pub fn from_sdl_str(content: &str) -> Result<Self> {
        Self::new().load_sdl_str(content)
    }

    /// Adds every type described by an introspection result.
    ///
    /// Introspection types (`__Schema`, `__Type`, etc) are skipped and the
    /// built-in scalars map onto the builder's pre-defined built-in types.
    pub fn load_introspection(
        mut self,
        introspection: IntrospectionQuery,
    ) -> Result<Self> {
        let schema = introspection.schema;

        if let Some(query_type) = schema.query_type {
            Self::set_root_type(&mut self.query_type, OperationKind::Query, query_type.name)?;
        }
        if let Some(mutation_type) = schema.mutation_type {
            Self::set_root_type(&mut self.mutation_type, OperationKind::Mutation, mutation_type.name)?;
        }
        if let Some(subscription_type) = schema.subscription_type {
            Self::set_root_type(
                &mut self.subscription_type,
                OperationKind::Subscription,
                subscription_type.name,
            )?;
        }

        for introspection_type in schema.types {
            if introspection_type.name.starts_with("__")
                || self.types_map_builder.is_builtin_scalar(&introspection_type.name) {
                continue;
            }
            let type_name = introspection_type.name.clone();
            let type_ = Self::type_from_introspection(introspection_type)?;
            self.types_map_builder.add_new_type(&type_name, type_)?;
        }

        Ok(self)
    }

    /// Deserializes an introspection result from JSON and adds every type it
    /// describes. Both the bare `{"__schema": ...}` object and a full
    /// `{"data": {"__schema": ...}}` response are accepted.
    pub fn load_introspection_json(self, json: &str) -> Result<Self> {
        let document: IntrospectionDocument = serde_json::from_str(json)
            .map_err(|err| SchemaBuildError::IntrospectionJsonError {
                err: err.to_string(),
            })?;
        self.load_introspection(document.into_query())
    }

    /// Parses an SDL document and adds every type, type extension, and
    /// `schema { ... }` root type definition it contains.
    pub fn load_sdl_str(mut self, content: &str) -> Result<Self> {
        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                err: err.to_string(),
            })?;

        // Extensions may precede the definitions they extend within a
        // document, so they're applied after all definitions are visited.
        let mut type_extensions = vec![];
        for def in ast_doc.definitions {
            use ast::schema::Definition;
            match def {
                Definition::SchemaDefinition(schema_def) =>
                    self.visit_ast_schemablock_def(schema_def)?,
                Definition::TypeDefinition(type_def) =>
                    self.visit_ast_type_def(type_def)?,
                Definition::TypeExtension(type_ext) =>
                    type_extensions.push(type_ext),
                Definition::DirectiveDefinition(directive_def) =>
                    log::trace!(
                        "Ignoring definition of the `@{}` directive.",
                        directive_def.name,
                    ),
            }
        }

        for type_ext in type_extensions {
            self.visit_ast_type_extension(type_ext)?;
        }

        Ok(self)
    }

    pub fn new() -> Self {
        Self {
            mutation_type: None,
            query_type: None,
            subscription_type: None,
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    fn add_fields_from_ast(
        type_data: &mut ObjectOrInterfaceTypeData,
        fields: &[ast::schema::Field],
    ) -> Result<()> {
        for field in fields {
            if type_data.fields.contains_key(&field.name) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_data.name.to_string(),
                    field_name: field.name.to_string(),
                });
            }
            type_data.add_field(
                field.name.as_str(),
                TypeAnnotation::from_ast_type(&field.field_type),
            );
        }
        Ok(())
    }

    fn add_input_fields_from_ast(
        input_type: &mut InputObjectType,
        fields: &[ast::schema::InputValue],
    ) -> Result<()> {
        for field in fields {
            if input_type.fields.contains_key(&field.name) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: input_type.name.to_string(),
                    field_name: field.name.to_string(),
                });
            }
            input_type.add_field(
                field.name.as_str(),
                TypeAnnotation::from_ast_type(&field.value_type),
            );
        }
        Ok(())
    }

    fn annotation_from_introspection(
        type_name: &str,
        member_name: &str,
        type_ref: &IntrospectionTypeRef,
    ) -> Result<TypeAnnotation> {
        Self::annotation_from_introspection_impl(
            type_name,
            member_name,
            type_ref,
            /* nullable = */ true,
        )
    }

    fn annotation_from_introspection_impl(
        type_name: &str,
        member_name: &str,
        type_ref: &IntrospectionTypeRef,
        nullable: bool,
    ) -> Result<TypeAnnotation> {
        let malformed = || SchemaBuildError::MalformedIntrospectionTypeRef {
            type_name: type_name.to_string(),
            member_name: member_name.to_string(),
        };

        match type_ref.kind {
            IntrospectionTypeKind::List => {
                let inner = type_ref.of_type.as_deref().ok_or_else(malformed)?;
                Ok(TypeAnnotation::list(
                    Self::annotation_from_introspection_impl(
                        type_name,
                        member_name,
                        inner,
                        true,
                    )?,
                    nullable,
                ))
            },

            IntrospectionTypeKind::NonNull => {
                let inner = type_ref.of_type.as_deref().ok_or_else(malformed)?;
                Self::annotation_from_introspection_impl(
                    type_name,
                    member_name,
                    inner,
                    false,
                )
            },

            _ => {
                let name = type_ref.name.as_deref().ok_or_else(malformed)?;
                Ok(TypeAnnotation::named(name, nullable))
            },
        }
    }

    fn resolve_root_type(
        types: &HashMap<String, GraphQLType>,
        operation: OperationKind,
        explicit_type_name: Option<String>,
    ) -> Result<Option<NamedGraphQLTypeRef>> {
        let default_type_name = match operation {
            OperationKind::Mutation => "Mutation",
            OperationKind::Query => "Query",
            OperationKind::Subscription => "Subscription",
        };

        let Some(type_name) = explicit_type_name else {
            return Ok(match types.get(default_type_name) {
                Some(GraphQLType::Object(_)) =>
                    Some(NamedGraphQLTypeRef::new(default_type_name)),
                _ => None,
            });
        };

        match types.get(type_name.as_str()) {
            Some(GraphQLType::Object(_)) =>
                Ok(Some(NamedGraphQLTypeRef::new(type_name))),
            Some(other) => Err(SchemaBuildError::RootOperationTypeNotObject {
                operation,
                type_name,
                kind: other.into(),
            }),
            None => Err(SchemaBuildError::UndefinedRootOperationType {
                operation,
                type_name,
            }),
        }
    }

    fn set_root_type(
        root_type: &mut Option<String>,
        operation: OperationKind,
        type_name: String,
    ) -> Result<()> {
        if root_type.is_some() {
            return Err(SchemaBuildError::DuplicateOperationDefinition {
                operation,
            });
        }
        *root_type = Some(type_name);
        Ok(())
    }

    fn specified_by_url(
        directives: &[ast::schema::Directive],
    ) -> Option<String> {
        directives.iter()
            .filter(|directive| directive.name == "specifiedBy")
            .flat_map(|directive| directive.arguments.iter())
            .find_map(|(arg_name, value)| match (arg_name.as_str(), value) {
                ("url", ast::schema::Value::String(url)) =>
                    Some(url.to_string()),
                _ => None,
            })
    }

    fn type_from_introspection(
        introspection_type: IntrospectionType,
    ) -> Result<GraphQLType> {
        let IntrospectionType {
            kind,
            name,
            fields,
            input_fields,
            interfaces,
            possible_types,
            enum_values,
            specified_by_url,
        } = introspection_type;

        Ok(match kind {
            IntrospectionTypeKind::Enum => GraphQLType::Enum(EnumType {
                name,
                values: enum_values.unwrap_or_default()
                    .into_iter()
                    .map(|value| value.name)
                    .collect(),
            }),

            IntrospectionTypeKind::InputObject => {
                let mut input_type = InputObjectType::new(name);
                for field in input_fields.unwrap_or_default() {
                    let annot = Self::annotation_from_introspection(
                        &input_type.name,
                        &field.name,
                        &field.type_ref,
                    )?;
                    input_type.add_field(field.name, annot);
                }
                GraphQLType::InputObject(input_type)
            },

            IntrospectionTypeKind::Interface | IntrospectionTypeKind::Object => {
                let mut type_data = ObjectOrInterfaceTypeData::new(name);
                type_data.interface_names = interfaces.unwrap_or_default()
                    .into_iter()
                    .map(|iface| iface.name)
                    .collect();
                for field in fields.unwrap_or_default() {
                    let annot = Self::annotation_from_introspection(
                        &type_data.name,
                        &field.name,
                        &field.type_ref,
                    )?;
                    type_data.add_field(field.name, annot);
                }
                if kind == IntrospectionTypeKind::Interface {
                    GraphQLType::Interface(InterfaceType(type_data))
                } else {
                    GraphQLType::Object(ObjectType(type_data))
                }
            },

            IntrospectionTypeKind::Scalar => GraphQLType::Scalar(ScalarType {
                name,
                specified_by_url,
            }),

            IntrospectionTypeKind::Union => GraphQLType::Union(UnionType {
                members: possible_types.unwrap_or_default()
                    .into_iter()
                    .map(|member| NamedGraphQLTypeRef::new(member.name))
                    .collect(),
                name,
            }),

            // Wrapping kinds only ever appear inside type references.
            IntrospectionTypeKind::List | IntrospectionTypeKind::NonNull =>
                return Err(SchemaBuildError::MalformedIntrospectionTypeRef {
                    type_name: name,
                    member_name: String::new(),
                }),
        })
    }

    fn visit_ast_schemablock_def(
        &mut self,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        if let Some(type_name) = schema_def.query {
            Self::set_root_type(&mut self.query_type, OperationKind::Query, type_name)?;
        }
        if let Some(type_name) = schema_def.mutation {
            Self::set_root_type(&mut self.mutation_type, OperationKind::Mutation, type_name)?;
        }
        if let Some(type_name) = schema_def.subscription {
            Self::set_root_type(
                &mut self.subscription_type,
                OperationKind::Subscription,
                type_name,
            )?;
        }
        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        let (type_name, type_) = match type_def {
            TypeDefinition::Enum(enum_def) => (
                enum_def.name.to_string(),
                GraphQLType::Enum(EnumType {
                    name: enum_def.name,
                    values: enum_def.values
                        .into_iter()
                        .map(|value| value.name)
                        .collect(),
                }),
            ),

            TypeDefinition::InputObject(inputobj_def) => {
                let mut input_type = InputObjectType::new(inputobj_def.name.as_str());
                Self::add_input_fields_from_ast(&mut input_type, &inputobj_def.fields)?;
                (inputobj_def.name, GraphQLType::InputObject(input_type))
            },

            TypeDefinition::Interface(iface_def) => {
                let mut type_data = ObjectOrInterfaceTypeData::new(iface_def.name.as_str());
                type_data.interface_names = iface_def.implements_interfaces;
                Self::add_fields_from_ast(&mut type_data, &iface_def.fields)?;
                (iface_def.name, GraphQLType::Interface(InterfaceType(type_data)))
            },

            TypeDefinition::Object(obj_def) => {
                let mut type_data = ObjectOrInterfaceTypeData::new(obj_def.name.as_str());
                type_data.interface_names = obj_def.implements_interfaces;
                Self::add_fields_from_ast(&mut type_data, &obj_def.fields)?;
                (obj_def.name, GraphQLType::Object(ObjectType(type_data)))
            },

            TypeDefinition::Scalar(scalar_def) => (
                scalar_def.name.to_string(),
                GraphQLType::Scalar(ScalarType {
                    specified_by_url: Self::specified_by_url(&scalar_def.directives),
                    name: scalar_def.name,
                }),
            ),

            TypeDefinition::Union(union_def) => (
                union_def.name.to_string(),
                GraphQLType::Union(UnionType {
                    members: union_def.types
                        .iter()
                        .map(NamedGraphQLTypeRef::new)
                        .collect(),
                    name: union_def.name,
                }),
            ),
        };

        self.types_map_builder.add_new_type(&type_name, type_)
    }

    fn visit_ast_type_extension(
        &mut self,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        match ext {
            TypeExtension::InputObject(inputobj_ext) => {
                let type_ = self.types_map_builder.get_type_mut(
                    &inputobj_ext.name,
                    GraphQLTypeKind::InputObject,
                )?;
                if let GraphQLType::InputObject(input_type) = type_ {
                    Self::add_input_fields_from_ast(input_type, &inputobj_ext.fields)?;
                }
            },

            TypeExtension::Interface(iface_ext) => {
                let type_ = self.types_map_builder.get_type_mut(
                    &iface_ext.name,
                    GraphQLTypeKind::Interface,
                )?;
                if let GraphQLType::Interface(InterfaceType(type_data)) = type_ {
                    type_data.interface_names.extend(iface_ext.implements_interfaces);
                    Self::add_fields_from_ast(type_data, &iface_ext.fields)?;
                }
            },

            TypeExtension::Object(obj_ext) => {
                let type_ = self.types_map_builder.get_type_mut(
                    &obj_ext.name,
                    GraphQLTypeKind::Object,
                )?;
                if let GraphQLType::Object(ObjectType(type_data)) = type_ {
                    type_data.interface_names.extend(obj_ext.implements_interfaces);
                    Self::add_fields_from_ast(type_data, &obj_ext.fields)?;
                }
            },

            TypeExtension::Enum(enum_ext) =>
                log::debug!("Ignoring extension of the `{}` enum.", enum_ext.name),

            TypeExtension::Scalar(scalar_ext) =>
                log::debug!("Ignoring extension of the `{}` scalar.", scalar_ext.name),

            TypeExtension::Union(union_ext) =>
                log::debug!("Ignoring extension of the `{}` union.", union_ext.name),
        }
        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
