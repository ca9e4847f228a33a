//! Script Execution
//!
//! Scripts run against the whole tree, not a single component: the scope
//! handed to the evaluator resolves the execution context by path and reaches
//! siblings through the reference registry.
//!
//! ```text
//! script_order(root) = [window, window.form, window.form.name, ...]
//!        │
//!        ▼ for each path, in order
//! pre-script hook → inline script → script file 1 → script file 2 ...
//!                        │
//!                        ▼
//!        ActionEvaluator::perform_js_action(source, ScriptScope)
//! ```

use crate::app::MainController;
use crate::components::{Component, find_component_mut};
use crate::domain::ElementPath;
use crate::error::{Error, Result};

/// What a script can reach while it runs
pub struct ScriptScope<'a> {
    root: &'a mut (dyn Component + 'static),
    path: ElementPath,
    controller: &'a dyn MainController,
}

impl<'a> ScriptScope<'a> {
    pub fn new(
        root: &'a mut (dyn Component + 'static),
        path: ElementPath,
        controller: &'a dyn MainController,
    ) -> Self {
        Self {
            root,
            path,
            controller,
        }
    }

    /// Path of the component the script is bound to
    pub fn path(&self) -> &ElementPath {
        &self.path
    }

    /// The component the script is bound to
    pub fn context(&mut self) -> Result<&mut (dyn Component + 'static)> {
        find_component_mut(&mut *self.root, self.path.as_str()).ok_or_else(|| {
            Error::ComponentNotFound {
                path: self.path.to_string(),
            }
        })
    }

    /// Any component of the page by path
    pub fn component_mut(&mut self, path: &str) -> Option<&mut (dyn Component + 'static)> {
        find_component_mut(&mut *self.root, path)
    }

    /// Component published under `name` in the reference registry
    pub fn reference_mut(&mut self, name: &str) -> Option<&mut (dyn Component + 'static)> {
        let path = self.controller.resolve_reference(name)?;
        find_component_mut(&mut *self.root, path.as_str())
    }

    pub fn controller(&self) -> &dyn MainController {
        self.controller
    }
}

/// Run the scripts of every component in `order`
///
/// Each component's scripts finish before the next component's start, so a
/// parent listed before its children is fully set up when they run.
pub async fn perform_scripts(
    root: &mut (dyn Component + 'static),
    controller: &dyn MainController,
    order: &[ElementPath],
) -> Result<()> {
    for path in order {
        perform_component_scripts(root, controller, path).await?;
    }
    Ok(())
}

/// Pre-script hook, inline script, then every script file in listed order
///
/// Each file is fetched and executed before the next fetch starts. A file
/// that fails to load is logged and skipped.
async fn perform_component_scripts(
    root: &mut (dyn Component + 'static),
    controller: &dyn MainController,
    path: &ElementPath,
) -> Result<()> {
    let Some(component) = find_component_mut(&mut *root, path.as_str()) else {
        tracing::warn!(path = %path, "Component removed before its scripts ran, skipping");
        return Ok(());
    };

    component.perform_component_script()?;
    let options = component.core().options();
    let script = options.script.clone();
    let script_files = options.script_files.clone();

    let evaluator = controller.action_evaluator();

    if let Some(script) = script {
        let mut scope = ScriptScope::new(&mut *root, path.clone(), controller);
        evaluator.perform_js_action(&script, &mut scope)?;
    }

    for file in &script_files {
        match controller.script_loader().fetch_script(file).await {
            Ok(source) => {
                let mut scope = ScriptScope::new(&mut *root, path.clone(), controller);
                evaluator.perform_js_action(&source, &mut scope)?;
            }
            Err(err) => tracing::error!(
                path = %path,
                script_file = %file,
                error = %err,
                "Failed to load script file, skipping"
            ),
        }
    }

    Ok(())
}
