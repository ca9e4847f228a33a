//! Reference Registry
//!
//! Name -> component path table used for cross-component scripted access.

use ahash::AHashMap;

use crate::domain::ElementPath;
use crate::error::{Error, Result};

/// Registered reference names of one page
#[derive(Debug, Default)]
pub struct ReferenceRegistry {
    names: AHashMap<String, ElementPath>,
}

impl ReferenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` for the component at `path`
    ///
    /// Re-registration by the same path (a rebuilt subtree) is accepted.
    pub fn register(&mut self, name: &str, path: &ElementPath) -> Result<()> {
        match self.names.get(name) {
            Some(existing) if existing != path => Err(Error::DuplicateReference {
                name: name.to_string(),
                existing: existing.to_string(),
                path: path.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                tracing::debug!(name, path = %path, "Registered reference name");
                self.names.insert(name.to_string(), path.clone());
                Ok(())
            }
        }
    }

    /// Drop the names of every component strictly beneath `path`
    pub fn release_below(&mut self, path: &ElementPath) {
        self.names
            .retain(|_, registered| registered == path || !registered.starts_with(path));
    }

    pub fn resolve(&self, name: &str) -> Option<&ElementPath> {
        self.names.get(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
