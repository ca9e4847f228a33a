//! ElementPath - Stable Component Address

use std::sync::Arc;

use crate::constants::PATH_SEPARATOR;

/// Dot-separated address of a component from the page root
///
/// Assigned once when the component is built and never changed afterwards.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct ElementPath(Arc<str>);

impl ElementPath {
    /// Create the path of a root component
    pub fn root(name: &str) -> Self {
        Self(name.into())
    }

    /// Path of a direct child of this component
    pub fn child(&self, key: &str) -> Self {
        Self(format!("{}{}{}", self.0, PATH_SEPARATOR, key).into())
    }

    /// Get the underlying string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local key of the component within its parent
    pub fn name(&self) -> &str {
        self.0
            .rsplit_once(PATH_SEPARATOR)
            .map_or(self.as_str(), |(_, name)| name)
    }

    /// Iterate over path segments, root first
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_SEPARATOR)
    }

    /// Whether `self` equals `ancestor` or lies beneath it
    pub fn starts_with(&self, ancestor: &ElementPath) -> bool {
        self.0 == ancestor.0
            || self
                .0
                .strip_prefix(ancestor.as_str())
                .is_some_and(|rest| rest.starts_with(PATH_SEPARATOR))
    }
}

impl From<&str> for ElementPath {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for ElementPath {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl std::fmt::Display for ElementPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
