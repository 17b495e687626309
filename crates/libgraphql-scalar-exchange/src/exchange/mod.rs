//! The pipeline stage which maps registered scalars in outbound variables and
//! inbound response data.

mod exchange;
mod operation;
mod operation_result;
mod scalar_exchange;
mod scalar_exchange_builder;

pub use exchange::Exchange;
pub use operation::Operation;
pub use operation::OperationParseError;
pub use operation_result::OperationResult;
pub use scalar_exchange::ScalarExchange;
pub use scalar_exchange::ScalarExchangeError;
pub use scalar_exchange_builder::ScalarExchangeBuildError;
pub use scalar_exchange_builder::ScalarExchangeBuilder;
