//! Bridge between the session store and the transfer-function widget.

use crate::select::{comparators, selectors, Binding};
use crate::state::{Histogram, LookupTable, SessionState};
use crate::traits::TransferFunctionView;
use std::sync::Arc;

/// Drives a [`TransferFunctionView`] widget from session state changes.
///
/// Three independent channels — color transfer function, normalized range
/// zoom, histogram — each with its own selector and comparator, so a change
/// in one derived value never recomputes or re-applies the others.
///
/// The widget may not exist yet when the first state update arrives:
/// [`TransferFunctionBridge::sync`] keeps recording accepted derived views
/// while unmounted, and [`TransferFunctionBridge::mount`] re-applies the
/// latest known view on every channel, so no update is dropped for racing
/// widget construction.
pub struct TransferFunctionBridge<W: TransferFunctionView> {
    widget: Option<W>,
    lookup_table: Binding<Option<Arc<LookupTable>>>,
    range: Binding<Option<[f64; 2]>>,
    histogram: Binding<Option<Arc<Histogram>>>,
}

impl<W: TransferFunctionView> Default for TransferFunctionBridge<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: TransferFunctionView> TransferFunctionBridge<W> {
    /// Creates an unmounted bridge with its three channel bindings.
    pub fn new() -> Self {
        Self {
            widget: None,
            lookup_table: Binding::with_comparator(
                selectors::select_lookup_table,
                comparators::lookup_table_unchanged,
            ),
            range: Binding::with_comparator(
                selectors::select_color_range_normalized,
                comparators::range_pair_unchanged,
            ),
            histogram: Binding::with_comparator(
                selectors::select_histogram,
                comparators::histogram_unchanged,
            ),
        }
    }

    /// Returns true if a widget is attached.
    pub fn is_mounted(&self) -> bool {
        self.widget.is_some()
    }

    /// Returns the attached widget, if any.
    pub fn widget(&self) -> Option<&W> {
        self.widget.as_ref()
    }

    /// Attaches a freshly constructed widget.
    ///
    /// Construction is idempotent-guarded: if a widget is already attached
    /// the new one is discarded. On attachment the latest accepted derived
    /// view of every channel is replayed, so the widget ends up in the same
    /// state it would have reached had it existed from the start.
    pub fn mount(&mut self, widget: W) {
        if self.widget.is_some() {
            return;
        }
        self.widget = Some(widget);
        if let Some(widget) = self.widget.as_mut() {
            if let Some(Some(table)) = self.lookup_table.latest() {
                widget.set_color_transfer_function(table);
            }
            if let Some(Some(range)) = self.range.latest() {
                if range.iter().all(|v| v.is_finite()) {
                    widget.set_range_zoom(*range);
                }
            }
            if let Some(Some(histogram)) = self.histogram.latest() {
                widget.set_histogram(histogram);
            }
        }
    }

    /// Detaches the widget, e.g. when its mount target disappears.
    ///
    /// Bindings keep their latest accepted views; a later mount replays
    /// them.
    pub fn unmount(&mut self) -> Option<W> {
        self.widget.take()
    }

    /// Evaluates all three channels against a state snapshot and applies
    /// whichever changed meaningfully.
    ///
    /// Absent derived values are recorded but not forwarded; the widget
    /// keeps showing the previous data until the new component's data
    /// becomes available. Non-finite range pairs are suppressed at this
    /// boundary and never reach the widget.
    pub fn sync(&mut self, state: &SessionState) {
        if let Some(view) = self.lookup_table.poll(state) {
            if let (Some(widget), Some(table)) = (self.widget.as_mut(), view.as_ref()) {
                widget.set_color_transfer_function(table);
            }
        }
        if let Some(view) = self.range.poll(state) {
            if let (Some(widget), Some(range)) = (self.widget.as_mut(), view.as_ref()) {
                if range.iter().all(|v| v.is_finite()) {
                    widget.set_range_zoom(*range);
                }
            }
        }
        if let Some(view) = self.histogram.poll(state) {
            if let (Some(widget), Some(histogram)) = (self.widget.as_mut(), view.as_ref()) {
                widget.set_histogram(histogram);
            }
        }
    }
}
