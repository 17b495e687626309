use crate::scalars::ScalarMap;
use crate::types::GraphQLType;
use std::collections::HashMap;

/// Maps scalar type names to the [`ScalarMap`] used to convert values of that
/// scalar. Only scalars registered here are ever transformed.
#[derive(Clone, Debug, Default)]
pub struct ScalarRegistry {
    scalars: HashMap<String, ScalarMap>,
}
impl ScalarRegistry {
    pub fn contains(&self, scalar_name: &str) -> bool {
        self.scalars.contains_key(scalar_name)
    }

    pub fn get(&self, scalar_name: &str) -> Option<&ScalarMap> {
        self.scalars.get(scalar_name)
    }

    /// Registers `scalar_map` for the scalar named `scalar_name`, returning
    /// the previously registered [`ScalarMap`] (if any).
    pub fn insert(
        &mut self,
        scalar_name: impl Into<String>,
        scalar_map: ScalarMap,
    ) -> Option<ScalarMap> {
        self.scalars.insert(scalar_name.into(), scalar_map)
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    /// Indicates if `type_` is a scalar type (custom or built-in) with a
    /// registered [`ScalarMap`].
    pub fn is_mapped_scalar(&self, type_: &GraphQLType) -> bool {
        type_.is_scalar() && self.contains(type_.name())
    }

    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    /// Like [`ScalarRegistry::is_mapped_scalar()`], but returns the scalar's
    /// name when it is mapped.
    pub fn mapped_scalar_name<'t>(&self, type_: &'t GraphQLType) -> Option<&'t str> {
        self.is_mapped_scalar(type_).then(|| type_.name())
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar_names(&self) -> impl Iterator<Item = &str> {
        self.scalars.keys().map(String::as_str)
    }
}
impl<S: Into<String>> FromIterator<(S, ScalarMap)> for ScalarRegistry {
    fn from_iter<I: IntoIterator<Item = (S, ScalarMap)>>(iter: I) -> Self {
        Self {
            scalars: iter.into_iter()
                .map(|(name, scalar_map)| (name.into(), scalar_map))
                .collect(),
        }
    }
}
impl IntoIterator for ScalarRegistry {
    type Item = (String, ScalarMap);
    type IntoIter = std::collections::hash_map::IntoIter<String, ScalarMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.scalars.into_iter()
    }
}
