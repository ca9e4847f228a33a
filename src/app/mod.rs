//! Application Layer
//!
//! Page assembly and the controller that connects components to the host:
//! reference registry, navigation, modals and script evaluation.

mod controller;
mod evaluator;
mod page;
mod page_controller;
mod references;
mod scripting;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::*;
pub use evaluator::*;
pub use page::*;
pub use page_controller::*;
pub use references::*;
pub use scripting::*;
