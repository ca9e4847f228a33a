//! Container Component
//!
//! Composite node owning an ordered map of named children. Values flow
//! bottom-up through `value()`; value/state application, enabling and
//! lifecycle calls flow top-down.

use hashlink::LinkedHashMap;
use serde_json::Value;

use crate::components::{BuildContext, ChildMap, Component, ComponentCore, PageConstructor};
use crate::domain::ComponentValue;
use crate::error::{Error, Result};

/// Composite component
pub struct Container {
    core: ComponentCore,
    constructor: PageConstructor,
    children: ChildMap,
    /// The container's own directly-held value
    content: Value,
}

impl Container {
    /// Create an empty container
    pub fn new(core: ComponentCore, constructor: PageConstructor) -> Self {
        Self {
            core,
            constructor,
            children: ChildMap::new(),
            content: Value::Null,
        }
    }

    /// Factory registered under `container`
    pub fn build(cx: BuildContext<'_>) -> Result<Box<dyn Component>> {
        let mut container = Self::new(cx.core()?, cx.constructor.clone());
        container.construct_children(&cx.descriptor.children);
        Ok(Box::new(container))
    }

    /// Replace all children with ones built from `descriptors`
    ///
    /// The previous subtree is discarded wholesale, including the reference
    /// names it registered. Children that fail to build are skipped and their
    /// errors returned.
    pub fn construct_children(&mut self, descriptors: &LinkedHashMap<String, Value>) -> Vec<Error> {
        self.children.clear();
        self.core.controller().release_references(self.core.path());

        let (children, errors) = self.constructor.build_children(self.core.path(), descriptors);
        self.children = children;

        tracing::debug!(
            path = %self.core.path(),
            children = self.children.len(),
            failed = errors.len(),
            "Constructed container children"
        );
        errors
    }

    pub fn children(&self) -> &ChildMap {
        &self.children
    }

    /// Run one-time setup on every current child
    pub fn initialize_children(&mut self) -> Result<()> {
        for child in self.children.values_mut() {
            child.perform_initialize()?;
        }
        Ok(())
    }

    /// Values of every child keyed like the child map
    pub fn components_value(&self) -> LinkedHashMap<String, ComponentValue> {
        self.children
            .iter()
            .map(|(key, child)| (key.clone(), child.value()))
            .collect()
    }

    /// Apply `values` to the matching children; the payload must already be validated
    fn apply_to_children(
        &mut self,
        values: &LinkedHashMap<String, ComponentValue>,
        apply: impl Fn(&mut dyn Component, &ComponentValue) -> Result<()>,
    ) -> Result<()> {
        for (key, value) in values {
            if let Some(child) = self.children.get_mut(key) {
                apply(child.as_mut(), value)?;
            }
        }
        Ok(())
    }
}

impl Component for Container {
    fn core(&self) -> &ComponentCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ComponentCore {
        &mut self.core
    }

    fn component_value(&self) -> Value {
        self.content.clone()
    }

    fn set_component_value(&mut self, value: &Value) -> Result<()> {
        self.content = value.clone();
        Ok(())
    }

    fn value(&self) -> ComponentValue {
        ComponentValue {
            content: (!self.content.is_null()).then(|| self.content.clone()),
            ..ComponentValue::components(self.components_value())
        }
    }

    /// Every named child exists and accepts its payload, at any depth
    fn validate_value(&self, value: &ComponentValue) -> Result<()> {
        if let Some(content) = &value.content {
            self.validate_component_value(content)?;
        }
        for (key, child_value) in value.components.iter().flatten() {
            let child = self.children.get(key).ok_or_else(|| Error::ChildNotFound {
                path: self.core.path().to_string(),
                key: key.clone(),
            })?;
            child.validate_value(child_value)?;
        }
        Ok(())
    }

    /// Apply own content and the value of every child named in `components`
    ///
    /// Children not named are left untouched. The whole payload is validated
    /// first, so a failing call leaves the subtree unchanged.
    fn set_value(&mut self, value: &ComponentValue) -> Result<()> {
        self.validate_value(value)?;
        if let Some(content) = &value.content {
            self.set_component_value(content)?;
        }
        if let Some(components) = &value.components {
            self.apply_to_children(components, |child, value| child.set_value(value))?;
        }
        Ok(())
    }

    fn set_state(&mut self, state: &ComponentValue) -> Result<()> {
        self.validate_value(state)?;
        if let Some(content) = &state.content {
            self.set_component_state(content)?;
        }
        if let Some(enabled) = state.enabled {
            self.set_enabled(enabled);
        }
        if let Some(visible) = state.visible {
            self.set_visible(visible);
        }
        if let Some(components) = &state.components {
            self.apply_to_children(components, |child, state| child.set_state(state))?;
        }
        let committed = self.component_value();
        self.core.commit(committed);
        Ok(())
    }

    fn set_component_enabled(&mut self, enabled: bool) {
        for child in self.children.values_mut() {
            child.set_enabled(enabled);
        }
    }

    /// Own change or any descendant change
    ///
    /// Every child is asked, even after a change has been found.
    fn is_changed(&self) -> bool {
        self.children
            .values()
            .fold(self.is_component_changed(), |changed, child| {
                child.is_changed() | changed
            })
    }

    fn perform_initialize(&mut self) -> Result<()> {
        self.initialize_children()?;
        self.perform_component_initialize()?;
        let committed = self.component_value();
        self.core.commit(committed);
        Ok(())
    }

    fn child(&self, key: &str) -> Option<&(dyn Component + 'static)> {
        self.children.get(key).map(|child| child.as_ref())
    }

    fn child_components(&self) -> Vec<&(dyn Component + 'static)> {
        self.children.values().map(|child| child.as_ref()).collect()
    }

    fn child_mut(&mut self, key: &str) -> Option<&mut (dyn Component + 'static)> {
        self.children.get_mut(key).map(|child| child.as_mut())
    }

    fn as_container_mut(&mut self) -> Option<&mut Container> {
        Some(self)
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("core", &self.core)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
