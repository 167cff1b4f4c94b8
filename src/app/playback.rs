//! Scroll playback coordination.
//!
//! Advances every visible, scrolling plane by one step at a fixed interval,
//! emitting per-axis slice events for the store to apply.

use rviv::domain::plane_policy;
use rviv::{Event, SessionState};

/// Interval ticker for slicing plane scroll playback.
pub struct ScrollPlayback {
    interval: f64,
    last_advance: f64,
}

impl ScrollPlayback {
    /// Creates a ticker advancing at most once per `interval` seconds.
    pub fn new(interval: f64) -> Self {
        Self { interval, last_advance: 0.0 }
    }

    /// Produces the slice events due at time `now` (seconds).
    ///
    /// Returns an empty batch between ticks and for planes that are not
    /// both visible and scrolling; a stale scroll flag on an invisible
    /// plane never advances.
    pub fn tick(&mut self, now: f64, state: &SessionState) -> Vec<Event> {
        if now - self.last_advance < self.interval {
            return Vec::new();
        }
        self.last_advance = now;
        state
            .planes
            .iter()
            .filter(|(_, plane)| plane.visible && plane.scroll)
            .map(|(axis, plane)| Event::SliceChanged {
                axis,
                value: plane_policy::next_slice_value(plane),
            })
            .collect()
    }
}
