//! Main Controller Interface
//!
//! Cross-cutting services every component receives at construction:
//! reference registry, navigation, modal display and script evaluation.

use serde_json::Value;

use crate::app::ScriptScope;
use crate::domain::{ElementPath, ModalDimensions};
use crate::error::Result;
use crate::services::ScriptLoader;

/// Request to open a modal dialog on behalf of a component
#[derive(Debug, Clone, PartialEq)]
pub struct ModalRequest {
    /// Component the modal belongs to
    pub path: ElementPath,
    /// Page displayed inside the modal
    pub url: String,
    /// Serialized data handed to the modal page
    pub context: Option<Value>,
    pub dimensions: ModalDimensions,
}

impl ModalRequest {
    /// Create a modal request without context data
    pub fn new(path: ElementPath, url: impl Into<String>, dimensions: ModalDimensions) -> Self {
        Self {
            path,
            url: url.into(),
            context: None,
            dimensions,
        }
    }
}

/// Executes scripted actions with a component as execution context
///
/// The scope exposes the bound component and, through the reference
/// registry, the rest of the page.
pub trait ActionEvaluator {
    fn perform_js_action(&self, script: &str, scope: &mut ScriptScope<'_>) -> Result<()>;
}

/// Services the component tree calls into
pub trait MainController {
    /// Publish a component under a reference name
    ///
    /// Fails with `DuplicateReference` when another component already owns the name.
    fn register_reference_name(&self, name: &str, path: &ElementPath) -> Result<()>;

    /// Forget every reference registered strictly beneath `path`
    fn release_references(&self, path: &ElementPath);

    /// Path of the component registered under `name`
    fn resolve_reference(&self, name: &str) -> Option<ElementPath>;

    fn open_modal(&self, request: ModalRequest);

    fn go_to_page(&self, url: &str);

    fn action_evaluator(&self) -> &dyn ActionEvaluator;

    fn script_loader(&self) -> &dyn ScriptLoader;
}
