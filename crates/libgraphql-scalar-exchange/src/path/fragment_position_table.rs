use crate::path::FragmentPathError;
use crate::path::NodePath;
use crate::path::PathSegment;
use crate::path::ResolvedPath;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, FragmentPathError>;

/// Maps each fragment name to the [`NodePath`] at which that fragment is
/// spread into its enclosing selection set.
///
/// A table must be fully populated for a document before any path from that
/// document is resolved against it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentPositionTable {
    positions: HashMap<String, NodePath>,
}
impl FragmentPositionTable {
    pub fn get(&self, fragment_name: &str) -> Option<&NodePath> {
        self.positions.get(fragment_name)
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Records the position at which `fragment_name` is spread, returning the
    /// previously recorded position if there was one.
    pub fn record(
        &mut self,
        fragment_name: impl Into<String>,
        position: NodePath,
    ) -> Option<NodePath> {
        self.positions.insert(fragment_name.into(), position)
    }

    /// Flattens `path` into a [`ResolvedPath`] by substituting each
    /// [`PathSegment::Fragment`] with the (recursively resolved) position of
    /// that fragment's spread.
    pub fn resolve(&self, path: &NodePath) -> Result<ResolvedPath> {
        let mut visiting = vec![];
        let mut resolved = ResolvedPath::new();
        self.resolve_into(path, &mut visiting, &mut resolved)?;
        Ok(resolved)
    }

    fn resolve_into(
        &self,
        path: &NodePath,
        visiting: &mut Vec<String>,
        resolved: &mut ResolvedPath,
    ) -> Result<()> {
        for segment in path.segments() {
            match segment {
                PathSegment::Field(key) => resolved.push(key.as_str()),

                PathSegment::Fragment(fragment_name) => {
                    if let Some(cycle_start_idx) = visiting.iter().position(
                        |name| name == fragment_name,
                    ) {
                        let mut cycle_path = visiting[cycle_start_idx..].to_vec();
                        cycle_path.push(fragment_name.to_string());
                        return Err(FragmentPathError::FragmentCycle { cycle_path });
                    }

                    let position = self.positions.get(fragment_name).ok_or_else(
                        || FragmentPathError::UndefinedFragment {
                            fragment_name: fragment_name.to_string(),
                        },
                    )?;

                    visiting.push(fragment_name.to_string());
                    self.resolve_into(position, visiting, resolved)?;
                    visiting.pop();
                },
            }
        }
        Ok(())
    }
}
