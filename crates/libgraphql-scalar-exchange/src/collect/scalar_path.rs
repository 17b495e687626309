use crate::path::FragmentPathError;
use crate::path::FragmentPositionTable;
use crate::path::NodePath;
use crate::path::ResolvedPath;

/// A [`ResolvedPath`] at which a value of the named scalar type lives.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ScalarPath {
    pub scalar_name: String,
    pub path: ResolvedPath,
}
impl ScalarPath {
    pub fn new(
        scalar_name: impl Into<String>,
        path: impl Into<ResolvedPath>,
    ) -> Self {
        Self {
            scalar_name: scalar_name.into(),
            path: path.into(),
        }
    }
}

/// A [`NodePath`] (which may still start at a fragment) at which a value of
/// the named scalar type lives.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ScalarNodePath {
    pub scalar_name: String,
    pub path: NodePath,
}

/// The output of [`collect_response_paths()`](crate::collect::collect_response_paths).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponsePaths {
    /// Every scalar position in depth-first document order.
    pub scalars: Vec<ScalarNodePath>,

    /// Where each fragment of the document is spread.
    pub fragments: FragmentPositionTable,
}
impl ResponsePaths {
    /// Flattens every collected [`NodePath`] against the document's fragment
    /// positions, preserving order.
    pub fn resolve(&self) -> Result<Vec<ScalarPath>, FragmentPathError> {
        self.scalars.iter().map(|scalar| {
            self.fragments.resolve(&scalar.path).map(|path| ScalarPath {
                scalar_name: scalar.scalar_name.to_string(),
                path,
            })
        }).collect()
    }
}
