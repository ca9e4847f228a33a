//! Primitive Components
//!
//! Leaf widgets without children.

pub mod label;
pub mod link_button;

pub use label::*;
pub use link_button::*;
