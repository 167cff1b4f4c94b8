//! Session state components for the RVIV viewer.
//!
//! This module contains state-only records (no UI concerns):
//! - Image state (lookup tables, color ranges, histograms, selected component)
//! - Slicing plane state (per-axis position, visibility and scroll flags)
//! - View state (view mode, 2D flag, rotation, panel collapse)

mod image_state;
mod session;
mod slicing;
mod view_state;

pub use image_state::{ComponentId, Histogram, ImageState, LookupTable};
pub use session::SessionState;
pub use slicing::{Axis, SlicingPlane, SlicingPlanes};
pub use view_state::{ViewMode, ViewState};
