//! Test doubles shared by the component and page tests

use std::cell::RefCell;
use std::rc::Rc;

use crossbeam_channel::Receiver;
use serde_json::Value;

use crate::app::{ActionEvaluator, MainController, Page, PageController, ScriptScope};
use crate::components::{
    Component, ComponentCore, ComponentRegistry, LinkButtonValue, PageConstructor,
};
use crate::domain::{ComponentOptions, ComponentValue, ElementPath};
use crate::error::{Error, Result};
use crate::eventing::ControllerEvent;
use crate::services::StaticScriptLoader;

type ScriptRuns = Rc<RefCell<Vec<(String, String)>>>;

/// Records every scripted action
///
/// Understands two commands: `fail` raises a script error, and
/// `link <reference> <url>` points the referenced link button at `url`.
#[derive(Default, Clone)]
pub(crate) struct RecordingEvaluator {
    runs: ScriptRuns,
}

impl ActionEvaluator for RecordingEvaluator {
    fn perform_js_action(&self, script: &str, scope: &mut ScriptScope<'_>) -> Result<()> {
        let path = scope.path().to_string();
        if script == "fail" {
            return Err(Error::Script {
                path,
                message: "evaluation failed".to_string(),
            });
        }

        let words: Vec<&str> = script.split_whitespace().collect();
        if let ["link", reference, url] = words.as_slice() {
            let target = scope.reference_mut(reference).ok_or_else(|| Error::Script {
                path: path.clone(),
                message: format!("no component named `{reference}`"),
            })?;
            let value = serde_json::to_value(LinkButtonValue {
                value: url.to_string(),
                open_in_modal: false,
                modal_width: 10,
                modal_height: 10,
            })?;
            target.set_value(&ComponentValue::content(value))?;
        }

        self.runs.borrow_mut().push((path, script.to_string()));
        Ok(())
    }
}

/// Controller, constructor and host side of the event channel
pub(crate) struct TestHarness {
    pub controller: Rc<PageController>,
    pub constructor: PageConstructor,
    events: Receiver<ControllerEvent>,
    runs: ScriptRuns,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::assemble(ComponentRegistry::with_builtins(), StaticScriptLoader::new())
    }

    pub fn with_registry(registry: ComponentRegistry) -> Self {
        Self::assemble(registry, StaticScriptLoader::new())
    }

    pub fn with_loader(loader: StaticScriptLoader) -> Self {
        Self::assemble(ComponentRegistry::with_builtins(), loader)
    }

    fn assemble(registry: ComponentRegistry, loader: StaticScriptLoader) -> Self {
        let evaluator = RecordingEvaluator::default();
        let runs = Rc::clone(&evaluator.runs);
        let (controller, events) = PageController::new(evaluator, loader);
        let controller = Rc::new(controller);
        let shared: Rc<dyn MainController> = controller.clone();

        Self {
            constructor: PageConstructor::new(Rc::new(registry), shared),
            controller,
            events,
            runs,
        }
    }

    /// Core with default options at `path`
    pub fn core(&self, path: &str) -> ComponentCore {
        ComponentCore::new(
            ElementPath::from(path),
            ComponentOptions::default(),
            self.constructor.controller().clone(),
        )
        .expect("core without reference name")
    }

    pub fn build(&self, path: &str, raw: Value) -> Result<Box<dyn Component>> {
        self.constructor.build(ElementPath::from(path), &raw)
    }

    pub fn page(&self, raw: Value) -> Result<Page> {
        Page::build(self.constructor.clone(), &raw)
    }

    pub fn drain_events(&self) -> Vec<ControllerEvent> {
        self.events.try_iter().collect()
    }

    pub fn reference(&self, name: &str) -> Option<String> {
        self.controller
            .resolve_reference(name)
            .map(|path| path.to_string())
    }

    /// (path, script) pairs in execution order
    pub fn script_runs(&self) -> Vec<(String, String)> {
        self.runs.borrow().clone()
    }
}
