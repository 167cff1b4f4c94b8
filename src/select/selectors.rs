//! Concrete selectors over the session state.
//!
//! Every selector is a pure `fn(&SessionState) -> T` projection, cheap
//! enough to run on every store notification. Absent data (no selected
//! component, entry not yet loaded) yields an explicit `None` rather than
//! an error; degenerate range math yields non-finite values that the effect
//! layer must detect and skip.

use crate::domain::color_range;
use crate::state::{Histogram, LookupTable, SessionState, ViewMode};
use std::sync::Arc;

/// Selects the lookup table of the selected component.
///
/// Pair with [`crate::select::comparators::lookup_table_unchanged`] so a
/// rebuilt-but-equivalent table does not count as a change.
pub fn select_lookup_table(state: &SessionState) -> Option<Arc<LookupTable>> {
    let component = state.images.selected_component()?;
    state.images.lookup_table(component).cloned()
}

/// Selects the selected component's color range normalized against its
/// full-extent bounds.
///
/// Missing bounds fall back to the current range itself (a full window).
/// Zero-width bounds produce non-finite components; consumers skip them.
pub fn select_color_range_normalized(state: &SessionState) -> Option<[f64; 2]> {
    let component = state.images.selected_component()?;
    let current = state.images.color_range(component)?;
    let bounds = state.images.color_range_bounds(component).unwrap_or(current);
    Some(color_range::normalized_range(current, bounds))
}

/// Selects the histogram of the selected component.
///
/// Pair with [`crate::select::comparators::histogram_unchanged`] for cheap
/// identity comparison.
pub fn select_histogram(state: &SessionState) -> Option<Arc<Histogram>> {
    let component = state.images.selected_component()?;
    state.images.histogram(component).cloned()
}

/// Selects the per-axis plane visibility flags in x, y, z order.
pub fn select_plane_visibility(state: &SessionState) -> [bool; 3] {
    [
        state.planes.x.visible,
        state.planes.y.visible,
        state.planes.z.visible,
    ]
}

/// Selects the per-axis effective scroll flags in x, y, z order.
///
/// A stale scroll flag on an invisible plane reads as not scrolling.
pub fn select_plane_scrolling(state: &SessionState) -> [bool; 3] {
    [
        state.planes.x.visible && state.planes.x.scroll,
        state.planes.y.visible && state.planes.y.scroll,
        state.planes.z.visible && state.planes.z.scroll,
    ]
}

/// Selects the current view mode.
pub fn select_view_mode(state: &SessionState) -> ViewMode {
    state.view.view_mode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::{comparators, Binding};
    use crate::state::ComponentId;

    fn session_with_component(component: ComponentId) -> SessionState {
        let mut state = SessionState::new();
        state.images.select_component(component);
        state
    }

    #[test]
    fn selectors_yield_absent_without_a_selected_component() {
        let state = SessionState::new();
        assert!(select_lookup_table(&state).is_none());
        assert!(select_color_range_normalized(&state).is_none());
        assert!(select_histogram(&state).is_none());
    }

    #[test]
    fn lookup_table_selector_yields_absent_when_table_not_loaded() {
        let state = session_with_component(0);
        assert!(select_lookup_table(&state).is_none());
    }

    #[test]
    fn normalized_range_reflects_window_within_bounds() {
        let mut state = session_with_component(0);
        state.images.set_color_range(0, [250.0, 750.0]);
        state.images.set_color_range_bounds(0, [0.0, 1000.0]);
        assert_eq!(select_color_range_normalized(&state), Some([0.25, 0.75]));
    }

    #[test]
    fn missing_bounds_fall_back_to_a_full_window() {
        let mut state = session_with_component(0);
        state.images.set_color_range(0, [10.0, 40.0]);
        assert_eq!(select_color_range_normalized(&state), Some([0.0, 1.0]));
    }

    #[test]
    fn degenerate_bounds_surface_as_non_finite() {
        let mut state = session_with_component(0);
        state.images.set_color_range(0, [5.0, 5.0]);
        state.images.set_color_range_bounds(0, [5.0, 5.0]);
        let [low, high] = select_color_range_normalized(&state).unwrap();
        assert!(low.is_nan());
        assert!(high.is_nan());
    }

    #[test]
    fn rebuilt_lookup_table_is_not_a_meaningful_change() {
        let mut state = session_with_component(0);
        state.images.set_lookup_table(
            0,
            Arc::new(LookupTable::new("Viridis", vec![[0.0, 0.0, 0.0]])),
        );

        let mut binding = Binding::with_comparator(
            select_lookup_table,
            comparators::lookup_table_unchanged,
        );
        assert!(binding.poll(&state).is_some());

        // Equivalent reconstruction under the same preset name.
        state.images.set_lookup_table(
            0,
            Arc::new(LookupTable::new("Viridis", vec![[0.0, 0.0, 0.0]])),
        );
        assert!(binding.poll(&state).is_none());

        // A preset switch is meaningful.
        state.images.set_lookup_table(
            0,
            Arc::new(LookupTable::new("Inferno", vec![[0.1, 0.0, 0.0]])),
        );
        assert!(binding.poll(&state).is_some());
    }

    #[test]
    fn scrolling_selector_normalizes_stale_records() {
        let mut state = SessionState::new();
        state.planes.y.scroll = true; // stale: not visible
        assert_eq!(select_plane_scrolling(&state), [false, false, false]);

        state.planes.y.visible = true;
        assert_eq!(select_plane_scrolling(&state), [false, true, false]);
    }
}
