//! View configuration state.
//!
//! This module encapsulates how the session is currently being viewed:
//! volume vs. single-plane mode, the 2D flag, camera rotation, and whether
//! the control panel drawer is collapsed.

use crate::state::Axis;
use serde::{Deserialize, Serialize};

/// How the volume is currently presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// Full 3D volume rendering; all three plane controls are relevant.
    Volume,
    /// Single axis-aligned plane view; only the matching axis control is live.
    Plane(Axis),
}

impl ViewMode {
    /// Returns a human-readable label for the mode picker.
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Volume => "Volume",
            ViewMode::Plane(Axis::X) => "X Plane",
            ViewMode::Plane(Axis::Y) => "Y Plane",
            ViewMode::Plane(Axis::Z) => "Z Plane",
        }
    }
}

/// State related to view configuration.
///
/// Responsibilities:
/// - Tracking the current view mode and 2D flag
/// - Tracking camera rotation playback
/// - Tracking the control panel collapsed flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewState {
    view_mode: ViewMode,
    use_2d: bool,
    rotate_enabled: bool,
    ui_collapsed: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Creates a view state in 3D volume mode with the panel open.
    pub fn new() -> Self {
        Self {
            view_mode: ViewMode::Volume,
            use_2d: false,
            rotate_enabled: false,
            ui_collapsed: false,
        }
    }

    // ===== Queries =====

    /// Returns the current view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Returns true if the session is a purely 2D image.
    pub fn use_2d(&self) -> bool {
        self.use_2d
    }

    /// Returns true if camera rotation playback is on.
    pub fn rotate_enabled(&self) -> bool {
        self.rotate_enabled
    }

    /// Returns true if the control panel drawer is collapsed.
    pub fn ui_collapsed(&self) -> bool {
        self.ui_collapsed
    }

    // ===== Mutations (called from the store reducer) =====

    /// Switches the view mode.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Marks the session as a purely 2D image.
    pub fn set_use_2d(&mut self, use_2d: bool) {
        self.use_2d = use_2d;
    }

    /// Toggles camera rotation playback.
    pub fn toggle_rotate(&mut self) {
        self.rotate_enabled = !self.rotate_enabled;
    }

    /// Toggles the control panel drawer.
    pub fn toggle_ui_collapsed(&mut self) {
        self.ui_collapsed = !self.ui_collapsed;
    }
}
