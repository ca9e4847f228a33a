//! Password Reset
//!
//! Form state and the controller that submits it.

mod controller;
mod form;

pub use controller::*;
pub use form::*;
