//! Component Registry and Page Constructor
//!
//! Maps descriptor type names to factory functions and builds component
//! trees from descriptors. The registry is filled at startup and shared
//! read-only afterwards.

use std::rc::Rc;

use ahash::AHashMap;
use hashlink::LinkedHashMap;
use serde_json::Value;

use crate::app::MainController;
use crate::components::{Component, ComponentCore, Container, Label, LinkButton};
use crate::constants::{CONTAINER_TYPE, LABEL_TYPE, LINK_BUTTON_TYPE, PATH_SEPARATOR};
use crate::domain::{ComponentDescriptor, ElementPath};
use crate::error::{Error, Result};

/// Children of a container keyed by local name, in declaration order
pub type ChildMap = LinkedHashMap<String, Box<dyn Component>>;

/// Builds one component variant
pub type ComponentFactory = fn(BuildContext<'_>) -> Result<Box<dyn Component>>;

/// Everything a factory needs to build the component at `path`
pub struct BuildContext<'a> {
    pub path: ElementPath,
    pub descriptor: ComponentDescriptor,
    pub constructor: &'a PageConstructor,
}

impl BuildContext<'_> {
    /// Create the shared core, registering the reference name if declared
    pub fn core(&self) -> Result<ComponentCore> {
        ComponentCore::new(
            self.path.clone(),
            self.descriptor.options.clone(),
            Rc::clone(self.constructor.controller()),
        )
    }
}

/// Type name -> factory table
#[derive(Default)]
pub struct ComponentRegistry {
    factories: AHashMap<String, ComponentFactory>,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in container, label and link button
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register(CONTAINER_TYPE, Container::build)
            .register(LABEL_TYPE, Label::build)
            .register(LINK_BUTTON_TYPE, LinkButton::build);
        registry
    }

    /// Register a factory, replacing any previous one for `kind`
    pub fn register(&mut self, kind: impl Into<String>, factory: ComponentFactory) -> &mut Self {
        let kind = kind.into();
        if self.factories.insert(kind.clone(), factory).is_some() {
            tracing::warn!(kind = %kind, "Replaced component factory");
        }
        self
    }

    pub fn get(&self, kind: &str) -> Option<ComponentFactory> {
        self.factories.get(kind).copied()
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Registered type names, sorted
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

/// Instantiates components from descriptors
#[derive(Clone)]
pub struct PageConstructor {
    registry: Rc<ComponentRegistry>,
    controller: Rc<dyn MainController>,
}

impl PageConstructor {
    pub fn new(registry: Rc<ComponentRegistry>, controller: Rc<dyn MainController>) -> Self {
        Self {
            registry,
            controller,
        }
    }

    pub fn controller(&self) -> &Rc<dyn MainController> {
        &self.controller
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Build the component at `path`, recursing into composite variants
    pub fn build(&self, path: ElementPath, raw: &Value) -> Result<Box<dyn Component>> {
        let descriptor = ComponentDescriptor::from_value(&path, raw)?;
        let factory = self
            .registry
            .get(&descriptor.kind)
            .ok_or_else(|| Error::UnknownComponentType {
                path: path.to_string(),
                kind: descriptor.kind.clone(),
            })?;

        tracing::debug!(path = %path, kind = %descriptor.kind, "Building component");

        factory(BuildContext {
            path,
            descriptor,
            constructor: self,
        })
    }

    /// Build every child of `parent`
    ///
    /// A child that fails to build is logged and left out; its siblings are
    /// still built. The failures are returned alongside the children.
    pub fn build_children(
        &self,
        parent: &ElementPath,
        descriptors: &LinkedHashMap<String, Value>,
    ) -> (ChildMap, Vec<Error>) {
        let mut children = ChildMap::new();
        let mut errors = Vec::new();

        for (key, raw) in descriptors {
            if key.contains(PATH_SEPARATOR) {
                let err = Error::InvalidOption {
                    path: parent.to_string(),
                    key: key.clone(),
                    message: format!("child key must not contain `{PATH_SEPARATOR}`"),
                };
                tracing::error!(path = %parent, key = %key, "Invalid child key, skipping");
                errors.push(err);
                continue;
            }

            let path = parent.child(key);
            match self.build(path.clone(), raw) {
                Ok(child) => {
                    children.insert(key.clone(), child);
                }
                Err(err) => {
                    tracing::error!(path = %path, error = %err, "Failed to build component, skipping");
                    errors.push(err);
                }
            }
        }

        (children, errors)
    }
}

impl std::fmt::Debug for PageConstructor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageConstructor")
            .field("registry", &self.registry)
            .finish()
    }
}
