//! Computes, for a query document, every position in the operation's
//! variables or response data that holds a value of a registered scalar
//! type.

mod response_paths;
mod scalar_path;
mod variable_paths;

pub use response_paths::collect_response_paths;
pub use scalar_path::ResponsePaths;
pub use scalar_path::ScalarNodePath;
pub use scalar_path::ScalarPath;
pub use variable_paths::collect_variable_paths;

#[cfg(test)]
mod tests;
