//! Slicing plane interaction policy.
//!
//! Per-axis state machine over `{Hidden, VisibleStatic, VisibleScrolling}`
//! with the invariant that scroll playback requires visibility. Transitions
//! are pure: they take the current planes record and return a new full
//! record, which the caller dispatches as one wholesale-replacement event.
//! The shared record is never mutated in place ahead of notification.

use crate::state::{Axis, SlicingPlane, SlicingPlanes};

/// Effective mode of one slicing plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneMode {
    /// Plane not rendered.
    Hidden,
    /// Plane rendered at a fixed position.
    VisibleStatic,
    /// Plane rendered while playback advances its position.
    VisibleScrolling,
}

/// Returns the effective mode of a plane, normalizing stale records on read.
///
/// A record with `scroll` set but `visible` clear can arrive from elsewhere
/// (the invariant is only enforced at toggle time); it reads as Hidden and
/// the stray scroll flag stays inert.
pub fn plane_mode(plane: &SlicingPlane) -> PlaneMode {
    if !plane.visible {
        PlaneMode::Hidden
    } else if plane.scroll {
        PlaneMode::VisibleScrolling
    } else {
        PlaneMode::VisibleStatic
    }
}

/// Toggle-Visibility transition for one axis.
///
/// `Hidden -> VisibleStatic`, `VisibleStatic -> Hidden`,
/// `VisibleScrolling -> Hidden`. Turning visibility off clears the scroll
/// flag with it, since scroll cannot hold without visibility.
pub fn toggle_visibility(planes: &SlicingPlanes, axis: Axis) -> SlicingPlanes {
    let mut next = planes.clone();
    let plane = next.get_mut(axis);
    plane.visible = !plane.visible;
    if !plane.visible {
        plane.scroll = false;
    }
    next
}

/// Toggle-Scroll transition for one axis.
///
/// `VisibleStatic -> VisibleScrolling`, `VisibleScrolling -> VisibleStatic`.
/// `Hidden -> VisibleScrolling` is a single user action expanded into both
/// field writes (visible and scroll set together) in one combined record.
pub fn toggle_scroll(planes: &SlicingPlanes, axis: Axis) -> SlicingPlanes {
    let mut next = planes.clone();
    let plane = next.get_mut(axis);
    plane.scroll = !plane.scroll;
    if plane.scroll {
        plane.visible = true;
    }
    next
}

/// Returns the next playback position for a plane, advancing by `step` and
/// wrapping from `max` back to `min`.
///
/// A non-positive step leaves the position unchanged.
pub fn next_slice_value(plane: &SlicingPlane) -> f64 {
    if plane.step <= 0.0 {
        return plane.current_value;
    }
    let advanced = plane.current_value + plane.step;
    if advanced > plane.max {
        plane.min
    } else {
        advanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planes_with(axis: Axis, visible: bool, scroll: bool) -> SlicingPlanes {
        let mut planes = SlicingPlanes::default();
        let plane = planes.get_mut(axis);
        plane.visible = visible;
        plane.scroll = scroll;
        planes
    }

    #[test]
    fn toggle_visibility_shows_hidden_plane() {
        let planes = planes_with(Axis::X, false, false);
        let next = toggle_visibility(&planes, Axis::X);
        assert_eq!(plane_mode(next.get(Axis::X)), PlaneMode::VisibleStatic);
    }

    #[test]
    fn toggle_visibility_off_while_scrolling_stops_scrolling() {
        let planes = planes_with(Axis::Z, true, true);
        let next = toggle_visibility(&planes, Axis::Z);
        let plane = next.get(Axis::Z);
        assert!(!plane.visible);
        assert!(!plane.scroll);
        assert_eq!(plane_mode(plane), PlaneMode::Hidden);
    }

    #[test]
    fn toggle_scroll_from_hidden_sets_both_flags() {
        let planes = planes_with(Axis::Y, false, false);
        let next = toggle_scroll(&planes, Axis::Y);
        let plane = next.get(Axis::Y);
        assert!(plane.visible);
        assert!(plane.scroll);
        assert_eq!(plane_mode(plane), PlaneMode::VisibleScrolling);
    }

    #[test]
    fn toggle_scroll_off_keeps_plane_visible() {
        let planes = planes_with(Axis::X, true, true);
        let next = toggle_scroll(&planes, Axis::X);
        assert_eq!(plane_mode(next.get(Axis::X)), PlaneMode::VisibleStatic);
    }

    #[test]
    fn transitions_leave_other_axes_unchanged() {
        // Initial record: x visible, y and z hidden.
        let mut planes = SlicingPlanes::default();
        planes.x.visible = true;

        let next = toggle_scroll(&planes, Axis::Y);

        assert!(next.y.visible);
        assert!(next.y.scroll);
        assert_eq!(next.x, planes.x);
        assert_eq!(next.z, planes.z);
    }

    #[test]
    fn transitions_do_not_mutate_the_input_record() {
        let planes = planes_with(Axis::X, false, false);
        let _ = toggle_visibility(&planes, Axis::X);
        let _ = toggle_scroll(&planes, Axis::X);
        assert!(!planes.get(Axis::X).visible);
        assert!(!planes.get(Axis::X).scroll);
    }

    #[test]
    fn stale_scroll_without_visibility_reads_as_hidden() {
        let planes = planes_with(Axis::Y, false, true);
        assert_eq!(plane_mode(planes.get(Axis::Y)), PlaneMode::Hidden);
    }

    #[test]
    fn next_slice_value_advances_by_step() {
        let plane = SlicingPlane {
            min: 0.0,
            max: 10.0,
            step: 0.5,
            current_value: 2.0,
            visible: true,
            scroll: true,
        };
        assert_eq!(next_slice_value(&plane), 2.5);
    }

    #[test]
    fn next_slice_value_wraps_past_max() {
        let plane = SlicingPlane {
            min: 1.0,
            max: 10.0,
            step: 0.5,
            current_value: 9.8,
            visible: true,
            scroll: true,
        };
        assert_eq!(next_slice_value(&plane), 1.0);
    }

    #[test]
    fn next_slice_value_ignores_non_positive_step() {
        let plane = SlicingPlane { step: 0.0, ..SlicingPlane::default() };
        assert_eq!(next_slice_value(&plane), plane.current_value);
    }
}
