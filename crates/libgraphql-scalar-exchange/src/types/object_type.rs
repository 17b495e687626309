use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a field defined on an [`ObjectType`] or [`InterfaceType`].
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`TypeAnnotation`] specifying the type this field resolves to.
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

/// Data shared by [`ObjectType`] and [`InterfaceType`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interface_names: Vec<String>,
    pub(crate) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            fields: IndexMap::new(),
            interface_names: vec![],
            name: name.into(),
        }
    }

    pub(crate) fn add_field(
        &mut self,
        name: impl Into<String>,
        type_annotation: TypeAnnotation,
    ) {
        let name = name.into();
        self.fields.insert(name.clone(), Field {
            name,
            type_annotation,
        });
    }
}

/// Represents a defined GraphQL
/// [object type](https://spec.graphql.org/October2021/#sec-Objects).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);
impl ObjectType {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.fields.get(name)
    }

    /// The fields defined on this type, in definition order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.0.fields
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names.iter().map(String::as_str).collect()
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }
}

/// Represents a defined GraphQL
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);
impl InterfaceType {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.0.fields.get(name)
    }

    /// The fields defined on this type, in definition order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.0.fields
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names.iter().map(String::as_str).collect()
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }
}
