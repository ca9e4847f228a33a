//! LinkButton Component
//!
//! A button that opens a page, either in a modal dialog or in place of the
//! current view. Starts inactive; clicks are accepted only while active.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::app::ModalRequest;
use crate::components::{BuildContext, Component, ComponentCore};
use crate::domain::ModalDimensions;
use crate::error::{Error, Result};

/// Content exchanged through `value()`/`set_value()`
///
/// Every field is required: a payload replaces the target wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkButtonValue {
    pub value: String,
    pub open_in_modal: bool,
    pub modal_width: u32,
    pub modal_height: u32,
}

/// Navigation button
#[derive(Debug)]
pub struct LinkButton {
    core: ComponentCore,
    page_url: String,
    open_in_modal: bool,
    modal_dimensions: ModalDimensions,
    /// Clickable affordance, toggled only by `set_enabled`
    active: bool,
    /// Set once the click handler is bound in `perform_initialize`
    click_bound: bool,
}

impl LinkButton {
    pub fn new(core: ComponentCore) -> Self {
        Self {
            core,
            page_url: String::new(),
            open_in_modal: true,
            modal_dimensions: ModalDimensions::default(),
            active: false,
            click_bound: false,
        }
    }

    /// Factory registered under `linkButton`
    ///
    /// Recognizes optional `pageUrl`, `openInModal`, `modalWidth` and `modalHeight`
    /// options as the initial target.
    pub fn build(cx: BuildContext<'_>) -> Result<Box<dyn Component>> {
        let options = &cx.descriptor.options;
        let path = &cx.path;

        let page_url = options.str_option(path, "pageUrl")?.map(str::to_string);
        let open_in_modal = options.bool_option(path, "openInModal")?;
        let width = options.positive_option(path, "modalWidth")?;
        let height = options.positive_option(path, "modalHeight")?;

        let mut button = Self::new(cx.core()?);
        if let Some(page_url) = page_url {
            button.page_url = page_url;
        }
        if let Some(open_in_modal) = open_in_modal {
            button.open_in_modal = open_in_modal;
        }
        if let Some(width) = width {
            button.modal_dimensions.width = width;
        }
        if let Some(height) = height {
            button.modal_dimensions.height = height;
        }

        Ok(Box::new(button))
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    pub fn open_in_modal(&self) -> bool {
        self.open_in_modal
    }

    pub fn modal_dimensions(&self) -> ModalDimensions {
        self.modal_dimensions
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Decode and check a payload without assigning it
    fn parse_value(&self, value: &Value) -> Result<LinkButtonValue> {
        let incoming: LinkButtonValue =
            serde_json::from_value(value.clone()).map_err(|e| Error::InvalidValue {
                path: self.core.path().to_string(),
                message: e.to_string(),
            })?;

        if incoming.modal_width == 0 || incoming.modal_height == 0 {
            return Err(Error::InvalidValue {
                path: self.core.path().to_string(),
                message: format!(
                    "modal dimensions must be positive, got {}x{}",
                    incoming.modal_width, incoming.modal_height
                ),
            });
        }

        Ok(incoming)
    }

    fn insert_value(&mut self, value: &Value) -> Result<()> {
        let incoming = self.parse_value(value)?;
        self.page_url = incoming.value;
        self.open_in_modal = incoming.open_in_modal;
        self.modal_dimensions = ModalDimensions {
            width: incoming.modal_width,
            height: incoming.modal_height,
        };
        Ok(())
    }
}

impl Component for LinkButton {
    fn core(&self) -> &ComponentCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ComponentCore {
        &mut self.core
    }

    fn component_value(&self) -> Value {
        json!({
            "value": self.page_url,
            "openInModal": self.open_in_modal,
            "modalWidth": self.modal_dimensions.width,
            "modalHeight": self.modal_dimensions.height,
        })
    }

    fn set_component_value(&mut self, value: &Value) -> Result<()> {
        self.insert_value(value)
    }

    fn set_component_state(&mut self, state: &Value) -> Result<()> {
        self.insert_value(state)
    }

    fn validate_component_value(&self, value: &Value) -> Result<()> {
        self.parse_value(value).map(drop)
    }

    fn set_component_enabled(&mut self, enabled: bool) {
        self.active = enabled;
    }

    fn perform_component_initialize(&mut self) -> Result<()> {
        self.click_bound = true;
        Ok(())
    }

    fn click(&mut self) {
        if !self.click_bound || !self.active {
            tracing::debug!(path = %self.core.path(), "Ignoring click on inactive link button");
            return;
        }

        let controller = self.core.controller();
        if self.open_in_modal {
            controller.open_modal(ModalRequest::new(
                self.core.path().clone(),
                self.page_url.clone(),
                self.modal_dimensions,
            ));
        } else {
            controller.go_to_page(&self.page_url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::TestHarness;
    use crate::domain::{ComponentValue, ElementPath};
    use crate::eventing::ControllerEvent;

    fn initialized_button(harness: &TestHarness) -> LinkButton {
        let mut button = LinkButton::new(harness.core("window.details"));
        button.perform_initialize().expect("initialize");
        button
    }

    fn value(url: &str, open_in_modal: bool, width: u32, height: u32) -> Value {
        serde_json::to_value(LinkButtonValue {
            value: url.to_string(),
            open_in_modal,
            modal_width: width,
            modal_height: height,
        })
        .expect("serialize")
    }

    #[test]
    fn test_component_value_round_trips_exactly() {
        let harness = TestHarness::new();
        let mut button = initialized_button(&harness);
        let payload = json!({ "value": "x", "openInModal": true, "modalWidth": 5, "modalHeight": 6 });

        button.set_component_value(&payload).expect("set");

        assert_eq!(button.component_value(), payload);
    }

    #[test]
    fn test_defaults_before_any_value() {
        let harness = TestHarness::new();
        let button = LinkButton::new(harness.core("window.details"));

        assert_eq!(button.page_url(), "");
        assert!(button.open_in_modal());
        assert_eq!(button.modal_dimensions(), ModalDimensions::default());
        assert!(!button.is_active());
    }

    #[test]
    fn test_partial_payload_is_rejected_without_mutation() {
        let harness = TestHarness::new();
        let mut button = initialized_button(&harness);
        button
            .set_component_value(&value("a.html", false, 10, 20))
            .expect("set");

        let err = button
            .set_component_value(&json!({ "value": "b.html", "openInModal": true }))
            .unwrap_err();

        assert!(matches!(err, Error::InvalidValue { .. }));
        assert_eq!(button.component_value(), value("a.html", false, 10, 20));
    }

    #[test]
    fn test_validate_value_checks_without_applying() {
        let harness = TestHarness::new();
        let button = initialized_button(&harness);

        button
            .validate_value(&ComponentValue::content(value("a.html", false, 10, 20)))
            .expect("valid");
        let err = button
            .validate_value(&ComponentValue::content(json!({ "value": "x" })))
            .unwrap_err();

        assert!(matches!(err, Error::InvalidValue { .. }));
        assert_eq!(button.page_url(), "");
        assert_eq!(button.modal_dimensions(), ModalDimensions::default());
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let harness = TestHarness::new();
        let mut button = initialized_button(&harness);

        assert!(button.set_component_value(&value("a.html", true, 0, 20)).is_err());
        assert_eq!(button.modal_dimensions(), ModalDimensions::default());
    }

    #[test]
    fn test_set_value_is_idempotent() {
        let harness = TestHarness::new();
        let mut button = initialized_button(&harness);
        let payload = ComponentValue::content(value("a.html", true, 300, 200));

        button.set_value(&payload).expect("first");
        let once = button.value();
        button.set_value(&payload).expect("second");

        assert_eq!(button.value(), once);
    }

    #[test]
    fn test_click_while_inactive_does_nothing() {
        let harness = TestHarness::new();
        let mut button = initialized_button(&harness);
        button
            .set_component_value(&value("a.html", true, 300, 200))
            .expect("set");

        button.set_enabled(false);
        button.click();

        assert!(harness.drain_events().is_empty());
    }

    #[test]
    fn test_click_before_initialize_does_nothing() {
        let harness = TestHarness::new();
        let mut button = LinkButton::new(harness.core("window.details"));
        button.set_enabled(true);

        button.click();

        assert!(harness.drain_events().is_empty());
    }

    #[test]
    fn test_active_click_opens_exactly_one_modal() {
        let harness = TestHarness::new();
        let mut button = initialized_button(&harness);
        button
            .set_component_value(&value("details.html", true, 800, 600))
            .expect("set");

        button.set_enabled(true);
        button.click();

        assert_eq!(
            harness.drain_events(),
            vec![ControllerEvent::OpenModal(ModalRequest::new(
                ElementPath::from("window.details"),
                "details.html",
                ModalDimensions {
                    width: 800,
                    height: 600
                },
            ))]
        );
    }

    #[test]
    fn test_active_click_without_modal_navigates() {
        let harness = TestHarness::new();
        let mut button = initialized_button(&harness);
        button
            .set_component_value(&value("list.html", false, 800, 600))
            .expect("set");

        button.set_enabled(true);
        button.click();

        assert_eq!(
            harness.drain_events(),
            vec![ControllerEvent::go_to_page("list.html")]
        );
    }

    #[test]
    fn test_enabled_toggles_back_to_inactive() {
        let harness = TestHarness::new();
        let mut button = initialized_button(&harness);

        button.set_enabled(true);
        assert!(button.is_active());
        button.set_enabled(false);
        assert!(!button.is_active());
        assert_eq!(button.page_url(), "");
    }

    #[test]
    fn test_state_commits_and_value_marks_changed() {
        let harness = TestHarness::new();
        let mut button = initialized_button(&harness);

        button
            .set_state(&ComponentValue::content(value("a.html", true, 300, 200)))
            .expect("state");
        assert!(!button.is_changed());

        button
            .set_value(&ComponentValue::content(value("b.html", true, 300, 200)))
            .expect("value");
        assert!(button.is_changed());
    }

    #[test]
    fn test_build_reads_initial_options() {
        let harness = TestHarness::new();
        let mut component = harness
            .build(
                "window.details",
                json!({
                    "type": "linkButton",
                    "options": { "pageUrl": "a.html", "openInModal": false, "modalWidth": 640 }
                }),
            )
            .expect("build");

        assert_eq!(
            component.component_value(),
            value("a.html", false, 640, 560)
        );

        component.perform_initialize().expect("initialize");
        component.set_enabled(true);
        component.click();
        assert_eq!(harness.drain_events(), vec![ControllerEvent::go_to_page("a.html")]);
    }

    #[test]
    fn test_build_rejects_non_positive_dimension_option() {
        let harness = TestHarness::new();
        let err = harness
            .build(
                "window.details",
                json!({ "type": "linkButton", "options": { "modalHeight": -3 } }),
            )
            .err()
            .expect("invalid option");

        assert!(err.is_configuration());
        assert!(err.to_string().contains("modalHeight"));
        assert!(err.to_string().contains("window.details"));
    }
}
