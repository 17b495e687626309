use libgraphql_scalar_exchange::exchange::Exchange;
use libgraphql_scalar_exchange::exchange::Operation;
use libgraphql_scalar_exchange::exchange::OperationResult;
use libgraphql_scalar_exchange::exchange::ScalarExchange;
use libgraphql_scalar_exchange::exchange::ScalarExchangeError;
use libgraphql_scalar_exchange::path::FragmentPathError;
use libgraphql_scalar_exchange::scalars::ScalarMap;
use serde_json::Value;
use serde_json::json;

const SCHEMA: &str = r#"
    scalar Timestamp
    scalar Decimal

    type Query {
        orders(placedAfter: Timestamp, range: Range): [Order!]!
        order(id: ID!): Order
    }

    type Mutation {
        placeOrder(input: OrderInput!): Order
    }

    input Range {
        from: Timestamp
        to: Timestamp
    }

    input OrderInput {
        total: Decimal!
        deliverBy: Timestamp
    }

    type Order {
        id: ID!
        placedAt: Timestamp!
        total: Decimal
        lines: [Line!]!
    }

    type Line {
        sku: String!
        price: Decimal!
        shippedAt: [Timestamp]
    }
"#;

/// Timestamps travel as epoch seconds and are surfaced as `{"epoch": n}`
/// objects. Decimals travel as strings and are surfaced as numbers.
fn exchange() -> ScalarExchange {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    ScalarExchange::builder()
        .schema_sdl(SCHEMA)
        .scalar("Timestamp", ScalarMap::new(
            |app| app.get("epoch").cloned().unwrap_or(Value::Null),
            |wire| json!({ "epoch": wire }),
        ))
        .scalar("Decimal", ScalarMap::new(
            |app| json!(app.to_string()),
            |wire| wire.as_str()
                .and_then(|s| s.parse::<f64>().ok())
                .map(|n| json!(n))
                .unwrap_or(wire),
        ))
        .build()
        .unwrap()
}

#[test]
fn query_round_trip_through_fragments_and_lists() {
    let exchange = exchange();
    let operation = Operation::from_str(
        r#"
            query Orders($after: Timestamp, $range: Range) {
                orders(placedAfter: $after, range: $range) { ...OrderFields }
            }

            fragment OrderFields on Order {
                id
                placedAt
                lines { ...LineFields }
            }

            fragment LineFields on Line {
                sku
                price
                shippedAt
            }
        "#,
        json!({
            "after": { "epoch": 100 },
            "range": { "from": { "epoch": 1 }, "to": null },
        }),
    ).unwrap();

    let results: Vec<_> = exchange
        .run([operation], |operation| {
            assert_eq!(operation.variables(), &json!({
                "after": 100,
                "range": { "from": 1, "to": null },
            }));
            OperationResult::new(operation, Some(json!({
                "orders": [
                    {
                        "id": "o1",
                        "placedAt": 150,
                        "lines": [
                            { "sku": "a", "price": "9.50", "shippedAt": [160, null] },
                            { "sku": "b", "price": "1.25", "shippedAt": null },
                        ],
                    },
                    { "id": "o2", "placedAt": 170, "lines": [] },
                ],
            })))
        })
        .collect();

    assert_eq!(results.len(), 1);
    let result = results.into_iter().next().unwrap().unwrap();
    assert_eq!(result.data(), Some(&json!({
        "orders": [
            {
                "id": "o1",
                "placedAt": { "epoch": 150 },
                "lines": [
                    { "sku": "a", "price": 9.5, "shippedAt": [{ "epoch": 160 }, null] },
                    { "sku": "b", "price": 1.25, "shippedAt": null },
                ],
            },
            { "id": "o2", "placedAt": { "epoch": 170 }, "lines": [] },
        ],
    })));
}

#[test]
fn mutation_input_object_is_serialized() {
    let exchange = exchange();
    let operation = Operation::from_str(
        "mutation Place($input: OrderInput!) { placeOrder(input: $input) { id total } }",
        json!({ "input": { "total": 12.5, "deliverBy": { "epoch": 900 } } }),
    ).unwrap();

    let mapped = exchange.map_operation(operation);
    assert_eq!(mapped.variables(), &json!({
        "input": { "total": "12.5", "deliverBy": 900 },
    }));

    let result = exchange.map_result(OperationResult::new(
        mapped,
        Some(json!({ "placeOrder": { "id": "o3", "total": "12.5" } })),
    )).unwrap();
    assert_eq!(result.data(), Some(&json!({
        "placeOrder": { "id": "o3", "total": 12.5 },
    })));
}

#[test]
fn error_responses_pass_through() {
    let exchange = exchange();
    let operation = Operation::from_str(r#"{ order(id: "x") { placedAt } }"#, json!({}))
        .unwrap();

    let errors = vec![json!({ "message": "not found" })];
    let result = exchange.map_result(
        OperationResult::new(operation, None).with_errors(errors.clone()),
    ).unwrap();

    assert_eq!(result.data(), None);
    assert_eq!(result.errors(), errors.as_slice());
}

#[test]
fn malformed_fragment_graph_surfaces_as_error() {
    let exchange = exchange();
    let operation = Operation::from_str(
        r#"
            query { order(id: "1") { ...A } }
            fragment A on Order { lines { ...B } }
            fragment B on Line { price ...A }
        "#,
        json!({}),
    ).unwrap();

    let mut results = exchange.run([operation], |operation| {
        OperationResult::new(operation, Some(json!({ "order": null })))
    });

    let err = results.next().unwrap().unwrap_err();
    assert!(matches!(
        err,
        ScalarExchangeError::FragmentPath(FragmentPathError::FragmentCycle { .. }),
    ));
    assert!(results.next().is_none());
}
