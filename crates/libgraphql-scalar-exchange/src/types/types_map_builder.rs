use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeAnnotation;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub struct TypesMapBuilder {
    pub(super) types: HashMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            types: HashMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn add_new_type(
        &mut self,
        type_name: &str,
        type_: GraphQLType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                type_name: type_name.to_string(),
            });
        }

        if self.types.contains_key(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    /// Introspection results list the built-in scalars alongside every other
    /// type. Those entries are already present and are not duplicates.
    pub fn is_builtin_scalar(&self, type_name: &str) -> bool {
        GraphQLType::builtin_scalar(type_name).is_some()
    }

    pub fn get_type_mut(
        &mut self,
        type_name: &str,
        expected_kind: GraphQLTypeKind,
    ) -> Result<&mut GraphQLType> {
        let Some(type_) = self.types.get_mut(type_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: type_name.to_string(),
            });
        };

        let found_kind = GraphQLTypeKind::from(&*type_);
        if found_kind != expected_kind {
            return Err(SchemaBuildError::InvalidExtensionType {
                type_name: type_name.to_string(),
                expected_kind,
                found_kind,
            });
        }

        Ok(type_)
    }

    pub fn into_types_map(self) -> Result<HashMap<String, GraphQLType>> {
        // Final validation of all types together.
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => (),

                GraphQLType::InputObject(input_type) => {
                    for field in input_type.fields.values() {
                        self.check_type_annotation(
                            input_type.name(),
                            field.name(),
                            &field.type_annotation,
                        )?;
                    }
                },

                GraphQLType::Interface(iface_type) =>
                    self.check_object_or_interface(&iface_type.0)?,

                GraphQLType::Object(obj_type) =>
                    self.check_object_or_interface(&obj_type.0)?,

                GraphQLType::Union(union_type) => {
                    for member_name in union_type.member_type_names() {
                        match self.types.get(member_name) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(other) => return Err(
                                SchemaBuildError::InvalidUnionMemberType {
                                    union_name: union_type.name().to_string(),
                                    member_name: member_name.to_string(),
                                    member_kind: other.into(),
                                }
                            ),
                            None => return Err(
                                SchemaBuildError::UndefinedTypeReference {
                                    referencing_type: union_type.name().to_string(),
                                    member_name: None,
                                    type_name: member_name.to_string(),
                                }
                            ),
                        }
                    }
                },
            }
        }

        Ok(self.types)
    }

    fn check_object_or_interface(
        &self,
        type_data: &ObjectOrInterfaceTypeData,
    ) -> Result<()> {
        for field in type_data.fields.values() {
            self.check_type_annotation(
                type_data.name.as_str(),
                field.name(),
                &field.type_annotation,
            )?;
        }

        for iface_name in &type_data.interface_names {
            if !self.types.contains_key(iface_name) {
                return Err(SchemaBuildError::UndefinedTypeReference {
                    referencing_type: type_data.name.to_string(),
                    member_name: None,
                    type_name: iface_name.to_string(),
                });
            }
        }

        Ok(())
    }

    fn check_type_annotation(
        &self,
        type_name: &str,
        member_name: &str,
        type_annotation: &TypeAnnotation,
    ) -> Result<()> {
        let referenced_name =
            type_annotation.innermost_named_type_annotation().graphql_type_name();

        if !self.types.contains_key(referenced_name) {
            return Err(SchemaBuildError::UndefinedTypeReference {
                referencing_type: type_name.to_string(),
                member_name: Some(member_name.to_string()),
                type_name: referenced_name.to_string(),
            });
        }

        Ok(())
    }
}
