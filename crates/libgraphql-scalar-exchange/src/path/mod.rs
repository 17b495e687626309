//! Access paths into operation variables and response data, and the tree
//! patcher which rewrites the values found at them.

mod fragment_path_error;
mod fragment_position_table;
mod node_path;
mod patch;

pub use fragment_path_error::FragmentPathError;
pub use fragment_position_table::FragmentPositionTable;
pub use node_path::NodePath;
pub use node_path::PathSegment;
pub use node_path::ResolvedPath;
pub use patch::patch_value;
