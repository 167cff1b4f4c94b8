//! Centralized session state for the RVIV viewer.
//!
//! This module composes focused state components that each manage a specific
//! aspect of the viewing session. The composition:
//! - Keeps invariants local within each component
//! - Allows borrow-checker friendly access to different state aspects
//! - Provides intent-revealing methods for state mutations

use crate::state::{ImageState, SlicingPlanes, ViewState};

/// The full session state, exclusively owned by the [`crate::store::Store`].
///
/// UI components hold read access plus the right to dispatch events; they
/// never mutate this record directly. Selectors project narrow derived views
/// out of it on every store notification, so each component stays cheap to
/// read.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Image components: lookup tables, color ranges, histograms
    pub images: ImageState,

    /// Slicing plane record, one plane per axis
    pub planes: SlicingPlanes,

    /// View mode, rotation and panel layout flags
    pub view: ViewState,
}

impl SessionState {
    /// Creates an empty session: no image components, default planes,
    /// 3D volume mode.
    pub fn new() -> Self {
        Self::default()
    }
}
