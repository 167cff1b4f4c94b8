//! The session store: single owner of session state plus the reducer.

use crate::state::SessionState;
use crate::store::Event;

/// Owns the session state and applies dispatched events.
///
/// Readers get a shared snapshot via [`Store::state`]; the only write path
/// is [`Store::dispatch`]. Each applied event bumps the revision counter so
/// observers can tell whether anything happened since they last looked.
pub struct Store {
    state: SessionState,
    revision: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(SessionState::new())
    }
}

impl Store {
    /// Creates a store owning the given initial session state.
    pub fn new(initial: SessionState) -> Self {
        Self { state: initial, revision: 0 }
    }

    /// Returns a read-only snapshot of the current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the number of events applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies one event synchronously.
    ///
    /// Dispatch always succeeds from the sender's point of view; events the
    /// reducer cannot use meaningfully still count as a transition.
    pub fn dispatch(&mut self, event: Event) {
        log::debug!("dispatch {}", event.type_name());
        log::trace!("{}", event.to_wire());
        self.apply(event);
        self.revision += 1;
    }

    /// Applies a batch of events in order.
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.dispatch(event);
        }
    }

    fn apply(&mut self, event: Event) {
        match event {
            Event::SlicingPlanesChanged(planes) => {
                // Wholesale replacement; the store never diffs the record.
                self.state.planes = planes;
            }
            Event::SliceChanged { axis, value } => {
                let plane = self.state.planes.get_mut(axis);
                plane.current_value = value.clamp(plane.min, plane.max);
            }
            Event::ToggleRotate => self.state.view.toggle_rotate(),
            Event::ToggleUiCollapsed => self.state.view.toggle_ui_collapsed(),
            Event::ViewModeChanged(mode) => self.state.view.set_view_mode(mode),
            Event::SelectComponent(component) => {
                self.state.images.select_component(component);
            }
            Event::LookupTableChanged { component, table } => {
                self.state.images.set_lookup_table(component, table);
            }
            Event::ColorRangeChanged { component, range } => {
                self.state.images.set_color_range(component, range);
            }
            Event::ColorRangeBoundsChanged { component, bounds } => {
                self.state.images.set_color_range_bounds(component, bounds);
            }
            Event::HistogramChanged { component, histogram } => {
                self.state.images.set_histogram(component, histogram);
            }
        }
    }
}
