use std::fmt;

/// A single step of a [`NodePath`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PathSegment {
    /// A response key: the field's alias if it has one, else its name.
    Field(String),

    /// Stands in for the position at which the named fragment is spread.
    Fragment(String),
}
impl PathSegment {
    pub fn as_fragment(&self) -> Option<&str> {
        match self {
            Self::Field(_) => None,
            Self::Fragment(name) => Some(name.as_str()),
        }
    }
}
impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(key) => f.write_str(key),
            Self::Fragment(name) => write!(f, "...{name}"),
        }
    }
}

/// A path from the root of a document's response data to some position
/// within it, as seen from the query document.
///
/// Fields which live inside a named fragment definition have paths that start
/// with a [`PathSegment::Fragment`] marker, because the position of the
/// fragment is only known once every spread in the document has been seen.
/// [`FragmentPositionTable::resolve()`](crate::path::FragmentPositionTable::resolve)
/// flattens such paths into a [`ResolvedPath`].
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct NodePath(Vec<PathSegment>);
impl NodePath {
    /// Returns a copy of this path extended by one `segment`.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(segment);
        Self(segments)
    }

    /// Returns a copy of this path extended by a
    /// [`PathSegment::Field`] for `response_key`.
    pub fn field_child(&self, response_key: impl Into<String>) -> Self {
        self.child(PathSegment::Field(response_key.into()))
    }

    /// The path at the root of the named fragment's definition.
    pub fn fragment_root(fragment_name: impl Into<String>) -> Self {
        Self(vec![PathSegment::Fragment(fragment_name.into())])
    }

    pub fn has_fragments(&self) -> bool {
        self.0.iter().any(|segment| segment.as_fragment().is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn new() -> Self {
        Self(vec![])
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}
impl From<Vec<PathSegment>> for NodePath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}
impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, self.0.iter())
    }
}

/// A [`NodePath`] made only of plain keys: the only path form accepted by
/// [`patch_value()`](crate::path::patch_value).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ResolvedPath(Vec<String>);
impl ResolvedPath {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn new() -> Self {
        Self(vec![])
    }

    pub fn push(&mut self, key: impl Into<String>) {
        self.0.push(key.into());
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}
impl Extend<String> for ResolvedPath {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}
impl From<Vec<String>> for ResolvedPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}
impl<S: Into<String>> FromIterator<S> for ResolvedPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
impl IntoIterator for ResolvedPath {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, self.0.iter())
    }
}

fn write_dotted<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    segments: impl Iterator<Item = T>,
) -> fmt::Result {
    for (idx, segment) in segments.enumerate() {
        if idx > 0 {
            f.write_str(".")?;
        }
        write!(f, "{segment}")?;
    }
    Ok(())
}
