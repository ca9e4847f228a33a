//! Label Component
//!
//! Static text rendered by the server. Holds no value and never changes.

use serde_json::{Value, json};

use crate::components::{BuildContext, Component, ComponentCore};
use crate::error::Result;

/// A read-only label
#[derive(Debug)]
pub struct Label {
    core: ComponentCore,
}

impl Label {
    pub fn new(core: ComponentCore) -> Self {
        Self { core }
    }

    /// Factory registered under `label`
    pub fn build(cx: BuildContext<'_>) -> Result<Box<dyn Component>> {
        Ok(Box::new(Self::new(cx.core()?)))
    }
}

impl Component for Label {
    fn core(&self) -> &ComponentCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ComponentCore {
        &mut self.core
    }

    fn component_value(&self) -> Value {
        json!({})
    }

    fn set_component_value(&mut self, _value: &Value) -> Result<()> {
        Ok(())
    }

    fn is_component_changed(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::MainController;
    use crate::app::testing::TestHarness;
    use crate::domain::{ComponentValue, ElementPath};

    #[test]
    fn test_label_value_is_always_empty() {
        let harness = TestHarness::new();
        let mut label = Label::new(harness.core("window.title"));

        label
            .set_value(&ComponentValue::content(json!({ "text": "ignored" })))
            .expect("set value");
        label
            .set_state(&ComponentValue::content(json!("also ignored")))
            .expect("set state");

        assert_eq!(label.value(), ComponentValue::content(json!({})));
        assert!(!label.is_changed());
    }

    #[test]
    fn test_label_registers_reference_name() {
        let harness = TestHarness::new();
        let _label = harness
            .build(
                "window.title",
                json!({ "type": "label", "options": { "referenceName": "title" } }),
            )
            .expect("build");

        assert_eq!(
            harness.controller.resolve_reference("title"),
            Some(ElementPath::from("window.title"))
        );
    }
}
