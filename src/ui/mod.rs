//! UI panels for the RVIV viewer.
//!
//! Panels render widgets from a read-only state snapshot and report user
//! interactions as typed events; the application dispatches those events
//! into the store. No panel mutates session state directly.

pub mod control_panel;
pub mod plane_sliders;
pub mod rotate_button;
pub mod transfer_function_panel;
