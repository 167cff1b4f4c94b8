//! Typed session events.
//!
//! Each event corresponds to one `{type, data}` message on the external
//! protocol. Dispatch is fire-and-forget: no return value or acknowledgment
//! flows back to the sender.

use crate::state::{Axis, ComponentId, Histogram, LookupTable, SlicingPlanes, ViewMode};
use serde_json::{json, Value};
use std::sync::Arc;

/// A session state transition request.
#[derive(Debug, Clone)]
pub enum Event {
    /// Replace the whole slicing planes record (never a delta).
    SlicingPlanesChanged(SlicingPlanes),
    /// Move one plane to a new position along its axis.
    SliceChanged { axis: Axis, value: f64 },
    /// Toggle camera rotation playback.
    ToggleRotate,
    /// Toggle the control panel drawer.
    ToggleUiCollapsed,
    /// Switch between volume and single-plane view modes.
    ViewModeChanged(ViewMode),
    /// Select an image component for editing.
    SelectComponent(ComponentId),
    /// Install a lookup table for a component.
    LookupTableChanged {
        component: ComponentId,
        table: Arc<LookupTable>,
    },
    /// Set the current color range (window) of a component.
    ColorRangeChanged {
        component: ComponentId,
        range: [f64; 2],
    },
    /// Set the full-extent color range bounds of a component.
    ColorRangeBoundsChanged {
        component: ComponentId,
        bounds: [f64; 2],
    },
    /// Install a computed histogram for a component.
    HistogramChanged {
        component: ComponentId,
        histogram: Arc<Histogram>,
    },
}

impl Event {
    /// Returns the protocol name of this event.
    ///
    /// Slice moves carry the axis in the name (`X_SLICE_CHANGED` etc.)
    /// rather than in the payload, matching the external protocol.
    pub fn type_name(&self) -> &'static str {
        match self {
            Event::SlicingPlanesChanged(_) => "SLICING_PLANES_CHANGED",
            Event::SliceChanged { axis: Axis::X, .. } => "X_SLICE_CHANGED",
            Event::SliceChanged { axis: Axis::Y, .. } => "Y_SLICE_CHANGED",
            Event::SliceChanged { axis: Axis::Z, .. } => "Z_SLICE_CHANGED",
            Event::ToggleRotate => "TOGGLE_ROTATE",
            Event::ToggleUiCollapsed => "TOGGLE_UI_COLLAPSED",
            Event::ViewModeChanged(_) => "VIEW_MODE_CHANGED",
            Event::SelectComponent(_) => "SELECT_IMAGE_COMPONENT",
            Event::LookupTableChanged { .. } => "LOOKUP_TABLE_CHANGED",
            Event::ColorRangeChanged { .. } => "COLOR_RANGE_CHANGED",
            Event::ColorRangeBoundsChanged { .. } => "COLOR_RANGE_BOUNDS_CHANGED",
            Event::HistogramChanged { .. } => "HISTOGRAM_CHANGED",
        }
    }

    /// Projects this event onto the external `{type, data}` wire shape.
    ///
    /// Used for trace logging; the in-process store consumes the enum
    /// directly.
    pub fn to_wire(&self) -> Value {
        let data = match self {
            Event::SlicingPlanesChanged(planes) => json!(planes),
            Event::SliceChanged { value, .. } => json!(value),
            Event::ToggleRotate | Event::ToggleUiCollapsed => Value::Null,
            Event::ViewModeChanged(mode) => json!(mode),
            Event::SelectComponent(component) => json!(component),
            Event::LookupTableChanged { component, table } => {
                json!({ "component": component, "table": table.as_ref() })
            }
            Event::ColorRangeChanged { component, range } => {
                json!({ "component": component, "range": range })
            }
            Event::ColorRangeBoundsChanged { component, bounds } => {
                json!({ "component": component, "bounds": bounds })
            }
            Event::HistogramChanged { component, histogram } => {
                json!({ "component": component, "histogram": histogram.as_ref() })
            }
        };
        json!({ "type": self.type_name(), "data": data })
    }
}
