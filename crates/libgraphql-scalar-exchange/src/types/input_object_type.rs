use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a defined GraphQL
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) fields: IndexMap<String, InputField>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            fields: IndexMap::new(),
            name: name.into(),
        }
    }

    pub(crate) fn add_field(
        &mut self,
        name: impl Into<String>,
        type_annotation: TypeAnnotation,
    ) {
        let name = name.into();
        self.fields.insert(name.clone(), InputField {
            name,
            type_annotation,
        });
    }

    /// The fields defined on this input object, in definition order.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`].
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputField {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// [`InputField`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
