use crate::types::NamedGraphQLTypeRef;

/// Represents a defined GraphQL
/// [union type](https://spec.graphql.org/October2021/#sec-Unions).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) members: Vec<NamedGraphQLTypeRef>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter().map(|member| member.name()).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
