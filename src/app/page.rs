//! Page - Root of the Component Tree
//!
//! Builds the tree from a page descriptor and addresses components by path or
//! reference name. Typical lifecycle:
//!
//! ```text
//! Page::build → initialize → perform_scripts → set_state / value / click ...
//!
//! reconstruct(path): rebuild children → initialize them → run their scripts
//! ```

use std::rc::Rc;

use hashlink::LinkedHashMap;
use serde_json::Value;

use crate::app::perform_scripts;
use crate::components::{
    Component, PageConstructor, find_component, find_component_mut, script_order,
};
use crate::constants::ROOT_ELEMENT_NAME;
use crate::domain::{ComponentValue, ElementPath};
use crate::error::{Error, Result};

/// A constructed page
pub struct Page {
    root: Box<dyn Component>,
    constructor: PageConstructor,
}

impl Page {
    /// Build the whole tree; the root is addressed as `window`
    pub fn build(constructor: PageConstructor, descriptor: &Value) -> Result<Self> {
        let root = constructor.build(ElementPath::root(ROOT_ELEMENT_NAME), descriptor)?;
        tracing::info!(path = %root.path(), "Page constructed");
        Ok(Self { root, constructor })
    }

    /// Build from descriptor JSON text
    pub fn from_json(constructor: PageConstructor, json: &str) -> Result<Self> {
        let descriptor: Value = serde_json::from_str(json)?;
        Self::build(constructor, &descriptor)
    }

    pub fn root(&self) -> &dyn Component {
        self.root.as_ref()
    }

    pub fn constructor(&self) -> &PageConstructor {
        &self.constructor
    }

    /// One-time setup of every component
    pub fn initialize(&mut self) -> Result<()> {
        self.root.perform_initialize()
    }

    /// Run every component's scripts, parents before children
    pub async fn perform_scripts(&mut self) -> Result<()> {
        let order = script_order(self.root.as_ref());
        let controller = Rc::clone(self.constructor.controller());
        perform_scripts(self.root.as_mut(), controller.as_ref(), &order).await
    }

    pub fn value(&self) -> ComponentValue {
        self.root.value()
    }

    pub fn set_value(&mut self, value: &ComponentValue) -> Result<()> {
        self.root.set_value(value)
    }

    pub fn set_state(&mut self, state: &ComponentValue) -> Result<()> {
        self.root.set_state(state)
    }

    pub fn is_changed(&self) -> bool {
        self.root.is_changed()
    }

    /// Component at a dot-separated path such as `window.form.save`
    pub fn component(&self, path: &str) -> Option<&dyn Component> {
        find_component(self.root.as_ref(), path).map(|component| component as &dyn Component)
    }

    pub fn component_mut(&mut self, path: &str) -> Option<&mut (dyn Component + 'static)> {
        find_component_mut(self.root.as_mut(), path)
    }

    /// Component published under a reference name
    pub fn reference_mut(&mut self, name: &str) -> Option<&mut (dyn Component + 'static)> {
        let path = self.constructor.controller().resolve_reference(name)?;
        self.component_mut(path.as_str())
    }

    /// Dispatch a host click to the component at `path`
    pub fn click(&mut self, path: &str) -> Result<()> {
        let component = self.component_mut(path).ok_or_else(|| Error::ComponentNotFound {
            path: path.to_string(),
        })?;
        component.click();
        Ok(())
    }

    /// Discard and rebuild the children of the container at `path`
    ///
    /// The new children are initialized and their scripts run, so they behave
    /// like components of a freshly built page. Returns the errors of children
    /// that failed to build.
    pub async fn reconstruct(
        &mut self,
        path: &str,
        children: &LinkedHashMap<String, Value>,
    ) -> Result<Vec<Error>> {
        let component = self.component_mut(path).ok_or_else(|| Error::ComponentNotFound {
            path: path.to_string(),
        })?;
        let container = component
            .as_container_mut()
            .ok_or_else(|| Error::NotAContainer {
                path: path.to_string(),
            })?;

        tracing::info!(path, "Reconstructing container subtree");
        let errors = container.construct_children(children);
        container.initialize_children()?;

        let order: Vec<ElementPath> = container
            .child_components()
            .into_iter()
            .flat_map(|child| script_order(child))
            .collect();
        let controller = Rc::clone(self.constructor.controller());
        perform_scripts(self.root.as_mut(), controller.as_ref(), &order).await?;

        Ok(errors)
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("root", &self.root.path())
            .finish()
    }
}
