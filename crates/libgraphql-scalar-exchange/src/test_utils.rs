use crate::exchange::ScalarExchange;
use crate::scalars::ScalarMap;
use crate::scalars::ScalarRegistry;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use serde_json::Value;

pub(crate) const TEST_SCHEMA_SDL: &str = r#"
    schema {
        query: Query
        mutation: Mutation
    }

    scalar DateTime
    scalar Money
    scalar Unmapped

    enum Role { ADMIN MEMBER }

    interface Node {
        id: ID!
        createdAt: DateTime
    }

    type User implements Node {
        id: ID!
        name: String
        role: Role
        createdAt: DateTime
        balance: Money
        posts: [Post!]!
        friends: [User]
    }

    type Post implements Node {
        id: ID!
        title: String
        createdAt: DateTime
        publishedAt: DateTime
        editHistory: [[DateTime]]
        author: User
    }

    union SearchResult = User | Post

    input PostFilter {
        after: DateTime
        before: DateTime!
        limit: Int
        role: Role
        nested: PostFilter
    }

    input Payment {
        amount: Money!
        memo: String
        scheduledFor: [DateTime!]
    }

    type Query {
        node(id: ID!): Node
        user(id: ID!): User
        posts(filter: PostFilter): [Post!]!
        search(term: String!): [SearchResult!]!
        now: DateTime!
        legacy: Unmapped
    }

    type Mutation {
        pay(payment: Payment!, at: DateTime): User
        touch(times: [DateTime!]!): [Post]
    }
"#;

pub(crate) fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .try_init();
}

/// Renders a value as `"{prefix}:{value}"` so tests can tell which direction
/// (and how many times) a scalar function was applied.
pub(crate) fn tag(prefix: &'static str) -> impl Fn(Value) -> Value + Send + Sync {
    move |value| match value {
        Value::String(s) => Value::String(format!("{prefix}:{s}")),
        other => Value::String(format!("{prefix}:{other}")),
    }
}

pub(crate) fn test_exchange() -> ScalarExchange {
    init_logging();
    ScalarExchange::builder()
        .schema(test_schema())
        .scalars(test_scalars())
        .build()
        .unwrap()
}

/// `DateTime` and `Money` are mapped; `Unmapped` deliberately is not.
pub(crate) fn test_scalars() -> ScalarRegistry {
    [
        ("DateTime", ScalarMap::new(tag("ser"), tag("de"))),
        ("Money", ScalarMap::new(tag("ser$"), tag("de$"))),
    ].into_iter().collect()
}

pub(crate) fn test_schema() -> Schema {
    SchemaBuilder::from_sdl_str(TEST_SCHEMA_SDL)
        .unwrap()
        .build()
        .unwrap()
}
