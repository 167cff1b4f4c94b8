//! Slicing plane state.
//!
//! One axis-aligned cut plane per spatial axis, each with its own slider
//! range, current position, visibility flag and scroll-playback flag.

use serde::{Deserialize, Serialize};

/// One of the three spatial axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in x, y, z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the upper-case axis label used in the UI and on the wire.
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// State of a single axis-aligned slicing plane.
///
/// The pairing of `visible` and `scroll` carries a policy invariant:
/// scrolling an invisible plane is disallowed. The invariant is enforced at
/// toggle time by [`crate::domain::plane_policy`], not by this record, so a
/// stale record violating it must still be read gracefully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlicingPlane {
    /// Lower bound of the slider range.
    pub min: f64,
    /// Upper bound of the slider range.
    pub max: f64,
    /// Slider step, also the per-tick scroll increment.
    pub step: f64,
    /// Current plane position along the axis.
    pub current_value: f64,
    /// Whether the plane is rendered.
    pub visible: bool,
    /// Whether scroll playback is advancing the plane.
    pub scroll: bool,
}

impl Default for SlicingPlane {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 0.01,
            current_value: 0.5,
            visible: false,
            scroll: false,
        }
    }
}

/// The full slicing planes record: one plane per axis.
///
/// The store replaces this record wholesale on `SLICING_PLANES_CHANGED`; it
/// never diffs against the previous record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlicingPlanes {
    pub x: SlicingPlane,
    pub y: SlicingPlane,
    pub z: SlicingPlane,
}

impl SlicingPlanes {
    /// Returns the plane for an axis.
    pub fn get(&self, axis: Axis) -> &SlicingPlane {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Returns the plane for an axis mutably.
    pub fn get_mut(&mut self, axis: Axis) -> &mut SlicingPlane {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Iterates planes in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &SlicingPlane)> {
        Axis::ALL.iter().map(move |&axis| (axis, self.get(axis)))
    }

    /// Returns true if any plane is actively scrolling.
    ///
    /// A stale `scroll` flag on an invisible plane does not count; scroll is
    /// gated on visibility when read.
    pub fn any_scrolling(&self) -> bool {
        self.iter().any(|(_, plane)| plane.visible && plane.scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_get_mut_address_the_same_plane() {
        let mut planes = SlicingPlanes::default();
        planes.get_mut(Axis::Y).current_value = 0.25;
        assert_eq!(planes.get(Axis::Y).current_value, 0.25);
        assert_eq!(planes.get(Axis::X).current_value, 0.5);
    }

    #[test]
    fn any_scrolling_requires_visibility() {
        let mut planes = SlicingPlanes::default();
        // Stale record: scroll set without visibility.
        planes.x.scroll = true;
        planes.x.visible = false;
        assert!(!planes.any_scrolling());

        planes.y.visible = true;
        planes.y.scroll = true;
        assert!(planes.any_scrolling());
    }
}
