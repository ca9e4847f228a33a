//! Features - Vertical Feature Slices
//!
//! Each feature contains its form state and controller.

pub mod password_reset;
