//! Connection Settings
//!
//! Server location and endpoint configuration for qcd-view.

mod config;

pub use config::*;
