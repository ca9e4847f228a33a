//! Component Contract
//!
//! Capability set every node of the page tree implements. Widgets provide the
//! `component_*` hooks; the shared `value`/`set_state`/`set_enabled`/... wrappers
//! are provided methods built on top of them.

use std::rc::Rc;

use serde_json::Value;

use crate::app::MainController;
use crate::components::Container;
use crate::constants::PATH_SEPARATOR;
use crate::domain::{ComponentOptions, ComponentValue, ElementPath};
use crate::error::Result;

/// State shared by every component variant
pub struct ComponentCore {
    path: ElementPath,
    options: ComponentOptions,
    controller: Rc<dyn MainController>,
    enabled: bool,
    visible: bool,
    loading: bool,
    /// Last value synchronized with the server
    committed: Option<Value>,
}

impl ComponentCore {
    /// Create the core of the component at `path`
    ///
    /// Publishes `options.referenceName` in the controller's registry.
    pub fn new(
        path: ElementPath,
        options: ComponentOptions,
        controller: Rc<dyn MainController>,
    ) -> Result<Self> {
        if let Some(name) = options.reference_name.as_deref() {
            controller.register_reference_name(name, &path)?;
        }

        Ok(Self {
            path,
            options,
            controller,
            enabled: false,
            visible: true,
            loading: false,
            committed: None,
        })
    }

    pub fn path(&self) -> &ElementPath {
        &self.path
    }

    /// Local key within the parent container
    pub fn name(&self) -> &str {
        self.path.name()
    }

    pub fn options(&self) -> &ComponentOptions {
        &self.options
    }

    pub fn controller(&self) -> &Rc<dyn MainController> {
        &self.controller
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn committed(&self) -> Option<&Value> {
        self.committed.as_ref()
    }

    /// Record `value` as the last-known-committed value
    pub fn commit(&mut self, value: Value) {
        self.committed = Some(value);
    }
}

impl std::fmt::Debug for ComponentCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentCore")
            .field("path", &self.path)
            .field("enabled", &self.enabled)
            .field("visible", &self.visible)
            .field("loading", &self.loading)
            .finish()
    }
}

/// A node of the page tree
pub trait Component {
    fn core(&self) -> &ComponentCore;

    fn core_mut(&mut self) -> &mut ComponentCore;

    // ==================== Widget Hooks ====================

    /// Widget data as exposed through `value()`
    fn component_value(&self) -> Value;

    fn set_component_value(&mut self, value: &Value) -> Result<()>;

    fn set_component_state(&mut self, state: &Value) -> Result<()> {
        self.set_component_value(state)
    }

    fn set_component_enabled(&mut self, _enabled: bool) {}

    fn set_component_loading(&mut self, _visible: bool) {}

    /// Whether the widget data differs from the committed value
    fn is_component_changed(&self) -> bool {
        self.core()
            .committed()
            .is_some_and(|committed| *committed != self.component_value())
    }

    /// One-time widget setup after the whole tree is built
    fn perform_component_initialize(&mut self) -> Result<()> {
        Ok(())
    }

    /// Hook run before the component's own scripts
    fn perform_component_script(&mut self) -> Result<()> {
        Ok(())
    }

    /// Check a widget payload without applying it
    fn validate_component_value(&self, _value: &Value) -> Result<()> {
        Ok(())
    }

    // ==================== Shared Contract ====================

    fn path(&self) -> &ElementPath {
        self.core().path()
    }

    fn value(&self) -> ComponentValue {
        ComponentValue::content(self.component_value())
    }

    /// Check a whole value or state payload without touching the component
    fn validate_value(&self, value: &ComponentValue) -> Result<()> {
        match &value.content {
            Some(content) => self.validate_component_value(content),
            None => Ok(()),
        }
    }

    fn set_value(&mut self, value: &ComponentValue) -> Result<()> {
        match &value.content {
            Some(content) => self.set_component_value(content),
            None => Ok(()),
        }
    }

    /// Apply a server-originated value and commit it
    fn set_state(&mut self, state: &ComponentValue) -> Result<()> {
        if let Some(content) = &state.content {
            self.set_component_state(content)?;
        }
        if let Some(enabled) = state.enabled {
            self.set_enabled(enabled);
        }
        if let Some(visible) = state.visible {
            self.set_visible(visible);
        }
        let committed = self.component_value();
        self.core_mut().commit(committed);
        Ok(())
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.core_mut().enabled = enabled;
        self.set_component_enabled(enabled);
    }

    fn set_visible(&mut self, visible: bool) {
        self.core_mut().visible = visible;
    }

    fn set_loading(&mut self, visible: bool) {
        self.core_mut().loading = visible;
        self.set_component_loading(visible);
    }

    fn is_changed(&self) -> bool {
        self.is_component_changed()
    }

    fn perform_initialize(&mut self) -> Result<()> {
        self.perform_component_initialize()?;
        let committed = self.component_value();
        self.core_mut().commit(committed);
        Ok(())
    }

    /// Host click on the component's affordance
    fn click(&mut self) {}

    // ==================== Tree Navigation ====================

    fn child(&self, _key: &str) -> Option<&(dyn Component + 'static)> {
        None
    }

    /// Direct children in declaration order
    fn child_components(&self) -> Vec<&(dyn Component + 'static)> {
        Vec::new()
    }

    fn child_mut(&mut self, _key: &str) -> Option<&mut (dyn Component + 'static)> {
        None
    }

    fn as_container_mut(&mut self) -> Option<&mut Container> {
        None
    }
}

/// Component at a dot-separated `path` below (or equal to) `root`
pub fn find_component<'a>(
    root: &'a (dyn Component + 'static),
    path: &str,
) -> Option<&'a (dyn Component + 'static)> {
    let mut segments = path.split(PATH_SEPARATOR);
    if segments.next() != Some(root.path().as_str()) {
        return None;
    }

    let mut current = root;
    for segment in segments {
        current = current.child(segment)?;
    }
    Some(current)
}

pub fn find_component_mut<'a>(
    root: &'a mut (dyn Component + 'static),
    path: &str,
) -> Option<&'a mut (dyn Component + 'static)> {
    let mut segments = path.split(PATH_SEPARATOR);
    if segments.next() != Some(root.path().as_str()) {
        return None;
    }

    let mut current = root;
    for segment in segments {
        current = current.child_mut(segment)?;
    }
    Some(current)
}

/// Paths of `component` and all its descendants, parents before children
pub fn script_order(component: &dyn Component) -> Vec<ElementPath> {
    let mut order = vec![component.path().clone()];
    for child in component.child_components() {
        order.extend(script_order(child));
    }
    order
}
