//! Domain Layer
//!
//! Plain data shared by the component tree: addresses, descriptors, values.

pub mod descriptor;
pub mod path;
pub mod value;

pub use descriptor::*;
pub use path::*;
pub use value::*;
