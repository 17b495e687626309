use crate::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::test_utils;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        let schema = SchemaBuilder::new().build();
        assert_eq!(schema.unwrap_err(), SchemaBuildError::NoQueryOperationTypeDefined);
    }

    #[test]
    fn builds_fixture_schema() {
        let schema = test_utils::test_schema();

        assert_eq!(schema.query_type().name(), "Query");
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Mutation"));
        assert!(schema.subscription_type().is_none());
        assert!(matches!(schema.lookup_type("DateTime"), Some(GraphQLType::Scalar(_))));
        assert!(matches!(schema.lookup_type("Node"), Some(GraphQLType::Interface(_))));
        assert!(matches!(schema.lookup_type("PostFilter"), Some(GraphQLType::InputObject(_))));
        assert!(matches!(schema.lookup_type("Role"), Some(GraphQLType::Enum(_))));
        assert!(matches!(schema.lookup_type("SearchResult"), Some(GraphQLType::Union(_))));
    }

    #[test]
    fn builtin_scalars_are_always_defined() -> Result<()> {
        let schema = SchemaBuilder::from_sdl_str("type Query { a: Int }")?.build()?;
        for name in ["Boolean", "Float", "ID", "Int", "String"] {
            assert!(schema.lookup_type(name).is_some_and(GraphQLType::is_scalar));
        }
        Ok(())
    }

    #[test]
    fn default_root_type_names() -> Result<()> {
        let schema = SchemaBuilder::from_sdl_str(concat!(
            "type Query { a: Int }\n",
            "type Mutation { b: Int }\n",
            "type Subscription { c: Int }",
        ))?.build()?;

        assert_eq!(schema.root_operation_type(OperationKind::Query).map(|t| t.name()), Some("Query"));
        assert_eq!(schema.root_operation_type(OperationKind::Mutation).map(|t| t.name()), Some("Mutation"));
        assert_eq!(
            schema.root_operation_type(OperationKind::Subscription).map(|t| t.name()),
            Some("Subscription"),
        );
        Ok(())
    }

    #[test]
    fn schema_block_overrides_root_type_names() -> Result<()> {
        let schema = SchemaBuilder::from_sdl_str(concat!(
            "schema { query: Root }\n",
            "type Root { a: Int }\n",
            "type Query { b: Int }",
        ))?.build()?;

        assert_eq!(schema.query_type().name(), "Root");
        Ok(())
    }

    #[test]
    fn field_order_is_preserved() -> Result<()> {
        let schema = SchemaBuilder::from_sdl_str(
            "input In { z: Int a: Int m: Int } type Query { f(arg: In): Int }",
        )?.build()?;

        let input_type = schema.lookup_type("In")
            .and_then(GraphQLType::as_input_object)
            .unwrap();
        let names: Vec<&str> = input_type.fields().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
        Ok(())
    }

    #[test]
    fn specified_by_url_is_recorded() -> Result<()> {
        let schema = SchemaBuilder::from_sdl_str(concat!(
            "scalar DateTime @specifiedBy(url: \"https://example.com/datetime\")\n",
            "type Query { now: DateTime }",
        ))?.build()?;

        let Some(GraphQLType::Scalar(scalar)) = schema.lookup_type("DateTime") else {
            panic!("DateTime is not a scalar");
        };
        assert_eq!(scalar.specified_by_url(), Some("https://example.com/datetime"));
        Ok(())
    }
}

mod field_types {
    use super::*;

    #[test]
    fn field_type_annotation_keeps_wrappers() {
        let schema = test_utils::test_schema();
        let post = schema.lookup_type("Post").unwrap();

        let annot = schema.field_type_annotation(post, "editHistory").unwrap();
        assert_eq!(annot.to_string(), "[[DateTime]]");
        assert_eq!(schema.resolve_annotation(annot).map(|t| t.name()), Some("DateTime"));
    }

    #[test]
    fn typename_is_defined_on_composite_types() {
        let schema = test_utils::test_schema();
        for type_name in ["Query", "Node", "SearchResult"] {
            let parent = schema.lookup_type(type_name).unwrap();
            let annot = schema.field_type_annotation(parent, "__typename").unwrap();
            assert_eq!(annot.to_string(), "String!");
        }

        let scalar = schema.lookup_type("DateTime").unwrap();
        assert!(schema.field_type_annotation(scalar, "__typename").is_none());
    }

    #[test]
    fn field_types_chain_through_nested_selections() {
        let schema = test_utils::test_schema();

        // Each step's parent type is borrowed from the schema, not from a
        // local, so the walk can carry annotations across iterations.
        let mut parent = schema.query_type();
        let mut annot = None;
        for field_name in ["user", "posts", "author", "createdAt"] {
            let field_annot = schema.field_type_annotation(parent, field_name).unwrap();
            if let Some(field_type) = schema.resolve_annotation(field_annot) {
                parent = field_type;
            }
            annot = Some(field_annot);
        }

        assert_eq!(annot.map(|annot| annot.to_string()), Some("DateTime".to_string()));
        assert_eq!(parent.name(), "DateTime");
    }

    #[test]
    fn unknown_field_has_no_type() {
        let schema = test_utils::test_schema();
        assert!(schema.field_type_annotation(schema.query_type(), "bogus").is_none());
    }
}

mod extensions {
    use super::*;

    #[test]
    fn object_extension_adds_fields() -> Result<()> {
        let schema = SchemaBuilder::from_sdl_str(concat!(
            "extend type Query { b: DateTime }\n",
            "scalar DateTime\n",
            "type Query { a: Int }",
        ))?.build()?;

        assert!(schema.query_type().field("a").is_some());
        assert!(schema.query_type().field("b").is_some());
        Ok(())
    }

    #[test]
    fn input_object_extension_adds_fields() -> Result<()> {
        let schema = SchemaBuilder::from_sdl_str(concat!(
            "input In { a: Int }\n",
            "extend input In { b: Int }\n",
            "type Query { f(arg: In): Int }",
        ))?.build()?;

        let input_type = schema.lookup_type("In")
            .and_then(GraphQLType::as_input_object)
            .unwrap();
        assert_eq!(input_type.fields().len(), 2);
        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() {
        let err = SchemaBuilder::from_sdl_str("extend type Nope { a: Int }").unwrap_err();
        assert_eq!(err, SchemaBuildError::ExtensionOfUndefinedType {
            type_name: "Nope".to_string(),
        });
    }

    #[test]
    fn extension_of_wrong_kind() {
        let err = SchemaBuilder::from_sdl_str(
            "scalar Thing  extend type Thing { a: Int }",
        ).unwrap_err();
        assert_eq!(err, SchemaBuildError::InvalidExtensionType {
            type_name: "Thing".to_string(),
            expected_kind: GraphQLTypeKind::Object,
            found_kind: GraphQLTypeKind::Scalar,
        });
    }
}

mod errors {
    use super::*;

    #[test]
    fn duplicate_type_definition() {
        let err = SchemaBuilder::from_sdl_str("type Query { a: Int }  type Query { b: Int }")
            .unwrap_err();
        assert_eq!(err, SchemaBuildError::DuplicateTypeDefinition {
            type_name: "Query".to_string(),
        });
    }

    #[test]
    fn duplicate_field_definition() {
        let err = SchemaBuilder::from_sdl_str("type Query { a: Int a: String }")
            .unwrap_err();
        assert_eq!(err, SchemaBuildError::DuplicateFieldNameDefinition {
            type_name: "Query".to_string(),
            field_name: "a".to_string(),
        });
    }

    #[test]
    fn dunder_prefixed_type_name() {
        let err = SchemaBuilder::from_sdl_str("type __Secret { a: Int }").unwrap_err();
        assert_eq!(err, SchemaBuildError::InvalidDunderPrefixedTypeName {
            type_name: "__Secret".to_string(),
        });
    }

    #[test]
    fn undefined_field_type() {
        let err = SchemaBuilder::from_sdl_str("type Query { a: [Nope!] }")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err, SchemaBuildError::UndefinedTypeReference {
            referencing_type: "Query".to_string(),
            member_name: Some("a".to_string()),
            type_name: "Nope".to_string(),
        });
        assert_eq!(err.to_string(), "`Query.a` references the undefined type `Nope`");
    }

    #[test]
    fn union_of_non_object() {
        let err = SchemaBuilder::from_sdl_str(
            "scalar S  type A { a: Int }  union U = A | S  type Query { u: U }",
        ).unwrap().build().unwrap_err();
        assert_eq!(err, SchemaBuildError::InvalidUnionMemberType {
            union_name: "U".to_string(),
            member_name: "S".to_string(),
            member_kind: GraphQLTypeKind::Scalar,
        });
    }

    #[test]
    fn undefined_explicit_root_type() {
        let err = SchemaBuilder::from_sdl_str("schema { query: Root }  type Query { a: Int }")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err, SchemaBuildError::UndefinedRootOperationType {
            operation: OperationKind::Query,
            type_name: "Root".to_string(),
        });
    }

    #[test]
    fn non_object_root_type() {
        let err = SchemaBuilder::from_sdl_str(
            "schema { query: Q }  interface Q { a: Int }",
        ).unwrap().build().unwrap_err();
        assert_eq!(err, SchemaBuildError::RootOperationTypeNotObject {
            operation: OperationKind::Query,
            type_name: "Q".to_string(),
            kind: GraphQLTypeKind::Interface,
        });
    }

    #[test]
    fn duplicate_schema_block() {
        let err = SchemaBuilder::from_sdl_str(
            "schema { query: Query }  schema { query: Query }  type Query { a: Int }",
        ).unwrap_err();
        assert_eq!(err, SchemaBuildError::DuplicateOperationDefinition {
            operation: OperationKind::Query,
        });
    }

    #[test]
    fn parse_error() {
        let err = SchemaBuilder::from_sdl_str("type Query {").unwrap_err();
        assert!(matches!(err, SchemaBuildError::ParseError { .. }));
    }
}
