use thiserror::Error;

/// Raised when a [`NodePath`](crate::path::NodePath) cannot be flattened
/// because the query document is not well-formed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FragmentPathError {
    #[error("Fragment cycle detected: {}", format_cycle_path(.cycle_path))]
    FragmentCycle { cycle_path: Vec<String> },

    #[error("No spread of the fragment '{fragment_name}' was recorded")]
    UndefinedFragment { fragment_name: String },
}

fn format_cycle_path(cycle: &[String]) -> String {
    cycle.join(" → ")
}
