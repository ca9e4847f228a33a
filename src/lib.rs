//! Qcadoo View Runtime Library
//!
//! Composes admin pages from declarative component descriptors: a tree of
//! containers, labels and link buttons sharing one value/state contract,
//! wired to a page controller for references, navigation, modals and scripts.
//! Also hosts the password reset form controller.

pub mod app;
pub mod components;
pub mod connection;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod services;
