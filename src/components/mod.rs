//! Components - Page Tree Nodes
//!
//! The shared component contract, the container composite, leaf widgets and
//! the registry that instantiates them from descriptors.

pub mod component;
pub mod container;
pub mod primitives;
pub mod registry;

pub use component::*;
pub use container::*;
pub use primitives::*;
pub use registry::*;
