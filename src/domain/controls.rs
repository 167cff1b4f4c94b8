//! Per-view-mode control liveness.
//!
//! Which plane controls are meaningfully live is a pure function of
//! `(view mode, 2D flag, axis)`, recomputed on every render and never
//! stored. Suppressed controls remain present in the layout but are hidden.

use crate::state::{Axis, ViewMode};

/// Returns true if the numeric slider for an axis is live.
///
/// Live in full 3D volume mode (all three axes) and in the matching
/// single-plane mode; suppressed elsewhere and for purely 2D sessions.
pub fn slider_live(mode: ViewMode, use_2d: bool, axis: Axis) -> bool {
    let is_volume = mode == ViewMode::Volume && !use_2d;
    is_volume || mode == ViewMode::Plane(axis)
}

/// Returns true if the visibility toggle button is live.
///
/// Plane visibility only makes sense while the full volume is rendered.
pub fn visibility_button_live(mode: ViewMode) -> bool {
    mode == ViewMode::Volume
}

/// Returns true if the scroll play/pause button for an axis is live.
pub fn scroll_button_live(mode: ViewMode, axis: Axis) -> bool {
    mode == ViewMode::Volume || mode == ViewMode::Plane(axis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sliders_live_in_volume_mode() {
        for axis in Axis::ALL {
            assert!(slider_live(ViewMode::Volume, false, axis));
        }
    }

    #[test]
    fn only_matching_slider_live_in_plane_mode() {
        assert!(slider_live(ViewMode::Plane(Axis::Y), false, Axis::Y));
        assert!(!slider_live(ViewMode::Plane(Axis::Y), false, Axis::X));
        assert!(!slider_live(ViewMode::Plane(Axis::Y), false, Axis::Z));
    }

    #[test]
    fn use_2d_suppresses_volume_sliders() {
        for axis in Axis::ALL {
            assert!(!slider_live(ViewMode::Volume, true, axis));
        }
    }

    #[test]
    fn visibility_button_only_in_volume_mode() {
        assert!(visibility_button_live(ViewMode::Volume));
        assert!(!visibility_button_live(ViewMode::Plane(Axis::X)));
    }

    #[test]
    fn scroll_button_in_volume_or_matching_plane_mode() {
        assert!(scroll_button_live(ViewMode::Volume, Axis::Z));
        assert!(scroll_button_live(ViewMode::Plane(Axis::Z), Axis::Z));
        assert!(!scroll_button_live(ViewMode::Plane(Axis::X), Axis::Z));
    }
}
