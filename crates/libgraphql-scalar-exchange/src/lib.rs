//! Maps custom GraphQL scalar values as they cross the boundary between
//! application code and a GraphQL transport.
//!
//! Outbound, every variable (or first-level input object field) whose type
//! is a registered scalar is passed through that scalar's `serialize`
//! function. Inbound, every field of the response `data` whose type is a
//! registered scalar is passed through its `deserialize` function. The
//! positions are derived purely from the [`Schema`](schema::Schema) and the
//! operation's query document, including positions reached through named
//! fragment spreads and list fields.
//!
//! ```
//! use libgraphql_scalar_exchange::exchange::Exchange;
//! use libgraphql_scalar_exchange::exchange::Operation;
//! use libgraphql_scalar_exchange::exchange::OperationResult;
//! use libgraphql_scalar_exchange::exchange::ScalarExchange;
//! use libgraphql_scalar_exchange::scalars::ScalarMap;
//! use libgraphql_scalar_exchange::schema::SchemaBuilder;
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = SchemaBuilder::from_sdl_str(
//!     "scalar Cents  type Query { price: Cents }",
//! )?.build()?;
//!
//! let exchange = ScalarExchange::builder()
//!     .schema(schema)
//!     .scalar("Cents", ScalarMap::new(
//!         |dollars| json!((dollars.as_f64().unwrap_or(0.0) * 100.0) as i64),
//!         |cents| json!(cents.as_i64().unwrap_or(0) as f64 / 100.0),
//!     ))
//!     .build()?;
//!
//! let operation = Operation::from_str("{ price }", json!({}))?;
//! let result = exchange.map_result(OperationResult::new(
//!     operation,
//!     Some(json!({ "price": 250 })),
//! ))?;
//! assert_eq!(result.data(), Some(&json!({ "price": 2.5 })));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod ast;
pub mod collect;
pub mod exchange;
mod named_ref;
mod operation_kind;
pub mod path;
pub mod scalars;
pub mod schema;
pub mod types;

pub use named_ref::DerefByNameError;
pub use operation_kind::OperationKind;

#[cfg(test)]
mod test_utils;
