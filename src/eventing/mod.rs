//! Eventing - Controller -> Host Events

mod controller_event;

pub use controller_event::*;
