//! Tracing Action Evaluator
//!
//! Evaluator for headless hosts without a script engine: every scripted
//! action is logged with its execution context.

use crate::app::{ActionEvaluator, ScriptScope};
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingActionEvaluator;

impl ActionEvaluator for TracingActionEvaluator {
    fn perform_js_action(&self, script: &str, scope: &mut ScriptScope<'_>) -> Result<()> {
        tracing::info!(
            path = %scope.path(),
            bytes = script.len(),
            "Scripted action (no script engine attached)"
        );
        tracing::trace!(path = %scope.path(), script, "Script source");
        Ok(())
    }
}
