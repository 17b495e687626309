use crate::ast;

/// The kind of an executable GraphQL operation. Selects which root type of
/// the [`Schema`](crate::schema::Schema) an operation's selection set is
/// typed against.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The kind of the given operation definition. The `{ ... }` shorthand
    /// form is always a query.
    pub fn of(op_def: &ast::query::OperationDefinition) -> Self {
        use graphql_parser::query::OperationDefinition;
        match op_def {
            OperationDefinition::Mutation(_) => Self::Mutation,
            OperationDefinition::Query(_)
                | OperationDefinition::SelectionSet(_) => Self::Query,
            OperationDefinition::Subscription(_) => Self::Subscription,
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        })
    }
}
