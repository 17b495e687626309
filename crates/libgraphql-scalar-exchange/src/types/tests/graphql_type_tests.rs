use crate::test_utils;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;

#[test]
fn builtin_scalars_by_name() {
    assert_eq!(GraphQLType::builtin_scalar("Boolean"), Some(GraphQLType::Bool));
    assert_eq!(GraphQLType::builtin_scalar("ID"), Some(GraphQLType::ID));
    assert_eq!(GraphQLType::builtin_scalar("DateTime"), None);
    assert_eq!(GraphQLType::Bool.name(), "Boolean");
}

#[test]
fn scalar_and_composite_classification() {
    let schema = test_utils::test_schema();
    let type_named = |name: &str| schema.lookup_type(name).unwrap();

    assert!(type_named("DateTime").is_scalar());
    assert!(type_named("Int").is_scalar());
    assert!(!type_named("Role").is_scalar());
    assert!(!type_named("PostFilter").is_scalar());

    assert!(type_named("User").is_composite());
    assert!(type_named("Node").is_composite());
    assert!(type_named("SearchResult").is_composite());
    assert!(!type_named("PostFilter").is_composite());
}

#[test]
fn interface_and_union_membership() {
    let schema = test_utils::test_schema();

    let Some(GraphQLType::Object(user)) = schema.lookup_type("User") else {
        panic!("User is not an object type");
    };
    assert_eq!(user.interface_names(), vec!["Node"]);

    let Some(GraphQLType::Union(search)) = schema.lookup_type("SearchResult") else {
        panic!("SearchResult is not a union type");
    };
    assert_eq!(search.member_type_names(), vec!["User", "Post"]);
    let member_kinds: Vec<GraphQLTypeKind> = search.member_type_names()
        .into_iter()
        .filter_map(|name| schema.lookup_type(name))
        .map(GraphQLTypeKind::from)
        .collect();
    assert_eq!(member_kinds, vec![GraphQLTypeKind::Object, GraphQLTypeKind::Object]);
}

#[test]
fn kind_display() {
    let schema = test_utils::test_schema();
    let kind = GraphQLTypeKind::from(schema.lookup_type("PostFilter").unwrap());
    assert_eq!(kind.to_string(), "input object");
    assert!(!kind.is_leaf());
}

#[test]
fn builtin_scalars_are_scalar_kind() {
    let schema = test_utils::test_schema();
    for name in ["Boolean", "Float", "ID", "Int", "String", "DateTime"] {
        let kind = GraphQLTypeKind::from(schema.lookup_type(name).unwrap());
        assert_eq!(kind, GraphQLTypeKind::Scalar);
        assert!(kind.is_leaf());
    }
    assert!(GraphQLTypeKind::from(schema.lookup_type("Role").unwrap()).is_leaf());
}
