use crate::ast;
use crate::collect::ScalarPath;
use crate::collect::collect_variable_paths;
use crate::scalars::ScalarMap;
use crate::scalars::ScalarRegistry;
use crate::schema::SchemaBuilder;
use crate::test_utils;

fn collect(query: &str) -> Vec<(String, String)> {
    collect_with(query, &test_utils::test_scalars())
}

fn collect_with(query: &str, scalars: &ScalarRegistry) -> Vec<(String, String)> {
    test_utils::init_logging();
    let schema = test_utils::test_schema();
    let document = ast::query::parse(query).unwrap();
    collect_variable_paths(&document, &schema, scalars)
        .into_iter()
        .map(|ScalarPath { scalar_name, path }| (scalar_name, path.to_string()))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected.iter()
        .map(|(scalar, path)| (scalar.to_string(), path.to_string()))
        .collect()
}

#[test]
fn scalar_variable_yields_variable_name() {
    assert_eq!(
        collect("query Q($since: DateTime) { now }"),
        pairs(&[("DateTime", "since")]),
    );
}

#[test]
fn wrapped_scalar_variable_is_unwrapped() {
    assert_eq!(
        collect("query Q($times: [DateTime!]!) { now }"),
        pairs(&[("DateTime", "times")]),
    );
}

#[test]
fn input_object_fields_are_expanded_in_declaration_order() {
    assert_eq!(
        collect("query Q($filter: PostFilter) { posts(filter: $filter) { id } }"),
        pairs(&[
            ("DateTime", "filter.after"),
            ("DateTime", "filter.before"),
        ]),
    );
}

#[test]
fn only_mapped_input_fields_are_expanded() {
    let schema = SchemaBuilder::from_sdl_str(r#"
        scalar ScalarType
        input Input { x: ScalarType y: Int }
        type Query { f(arg: Input): Int }
    "#).unwrap().build().unwrap();
    let scalars: ScalarRegistry = [
        ("ScalarType", ScalarMap::new(|v| v, |v| v)),
    ].into_iter().collect();
    let document = ast::query::parse("query ($varName: Input) { f(arg: $varName) }").unwrap();

    let paths = collect_variable_paths(&document, &schema, &scalars);
    assert_eq!(paths, vec![ScalarPath::new("ScalarType", vec![
        "varName".to_string(),
        "x".to_string(),
    ])]);
}

#[test]
fn nested_input_objects_are_not_expanded() {
    let found = collect("query Q($filter: PostFilter) { now }");
    assert!(found.iter().all(|(_, path)| !path.starts_with("filter.nested")));
}

#[test]
fn mutation_variables_are_collected() {
    assert_eq!(
        collect("mutation Pay($payment: Payment!, $at: DateTime) { pay(payment: $payment, at: $at) { id } }"),
        pairs(&[
            ("Money", "payment.amount"),
            ("DateTime", "payment.scheduledFor"),
            ("DateTime", "at"),
        ]),
    );
}

#[test]
fn every_operation_in_document_is_visited() {
    assert_eq!(
        collect(r#"
            query A($since: DateTime) { now }
            fragment F on User { id }
            mutation B($at: DateTime) { pay(payment: {amount: 1}, at: $at) { id } }
        "#),
        pairs(&[("DateTime", "since"), ("DateTime", "at")]),
    );
}

#[test]
fn unmapped_and_builtin_scalars_are_skipped() {
    assert_eq!(
        collect("query Q($legacy: Unmapped, $count: Int, $name: String) { now }"),
        Vec::<(String, String)>::new(),
    );
}

#[test]
fn registered_builtin_scalar_is_collected() {
    let scalars: ScalarRegistry = [("Int", ScalarMap::new(|v| v, |v| v))]
        .into_iter()
        .collect();
    assert_eq!(
        collect_with("query Q($count: Int, $since: DateTime) { now }", &scalars),
        pairs(&[("Int", "count")]),
    );
}

#[test]
fn unknown_variable_type_is_skipped() {
    assert_eq!(
        collect("query Q($x: NoSuchType, $since: DateTime) { now }"),
        pairs(&[("DateTime", "since")]),
    );
}

#[test]
fn shorthand_query_has_no_variables() {
    assert_eq!(collect("{ now }"), Vec::<(String, String)>::new());
}
