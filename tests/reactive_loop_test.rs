//! End-to-end tests of the reactive loop: typed event dispatch, store
//! transition, selector re-evaluation, comparator gating, effect bridge
//! application, widget mutation.

use anyhow::Result;
use rviv::domain::plane_policy;
use rviv::presentation::lut_presets;
use rviv::{
    Axis, Event, Histogram, LookupTable, SessionState, Store, TransferFunctionBridge,
    TransferFunctionView,
};
use std::sync::Arc;

/// Records every adapter call in order.
#[derive(Default, Debug, PartialEq)]
struct RecordingWidget {
    presets: Vec<String>,
    ranges: Vec<[f64; 2]>,
    histograms: Vec<Vec<u32>>,
}

impl TransferFunctionView for RecordingWidget {
    fn set_color_transfer_function(&mut self, table: &LookupTable) {
        self.presets.push(table.preset_name().to_string());
    }

    fn set_range_zoom(&mut self, range: [f64; 2]) {
        self.ranges.push(range);
    }

    fn set_histogram(&mut self, histogram: &Histogram) {
        self.histograms.push(histogram.counts().to_vec());
    }
}

fn demo_store() -> Result<Store> {
    let mut store = Store::new(SessionState::new());
    let table = lut_presets::preset("Viridis")
        .ok_or_else(|| anyhow::anyhow!("Viridis preset missing"))?;
    store.dispatch_all([
        Event::SelectComponent(0),
        Event::LookupTableChanged { component: 0, table: Arc::new(table) },
        Event::ColorRangeBoundsChanged { component: 0, bounds: [0.0, 1000.0] },
        Event::ColorRangeChanged { component: 0, range: [250.0, 750.0] },
        Event::HistogramChanged { component: 0, histogram: Arc::new(Histogram::new(vec![3, 8, 5])) },
    ]);
    Ok(store)
}

#[test]
fn dispatch_flows_through_selectors_into_the_widget() -> Result<()> {
    let mut store = demo_store()?;
    let mut bridge = TransferFunctionBridge::new();
    bridge.mount(RecordingWidget::default());

    bridge.sync(store.state());

    let widget = bridge.widget().unwrap();
    assert_eq!(widget.presets, vec!["Viridis"]);
    assert_eq!(widget.ranges, vec![[0.25, 0.75]]);
    assert_eq!(widget.histograms, vec![vec![3, 8, 5]]);

    // Unrelated state churn must not re-invoke any channel.
    store.dispatch(Event::ToggleRotate);
    store.dispatch(Event::SliceChanged { axis: Axis::X, value: 0.7 });
    bridge.sync(store.state());

    let widget = bridge.widget().unwrap();
    assert_eq!(widget.presets.len(), 1);
    assert_eq!(widget.ranges.len(), 1);
    assert_eq!(widget.histograms.len(), 1);
    Ok(())
}

#[test]
fn deferred_widget_construction_matches_eager_construction() -> Result<()> {
    let store = demo_store()?;

    // Eager: widget exists before the first update.
    let mut eager = TransferFunctionBridge::new();
    eager.mount(RecordingWidget::default());
    eager.sync(store.state());

    // Deferred: updates arrive first, the widget is constructed afterwards.
    let mut deferred = TransferFunctionBridge::new();
    deferred.sync(store.state());
    deferred.mount(RecordingWidget::default());

    assert_eq!(eager.widget(), deferred.widget());
    Ok(())
}

#[test]
fn toggle_scroll_on_hidden_axis_sets_both_flags_in_one_event() {
    let mut store = Store::new(SessionState::new());

    // Initial record: x visible, y and z hidden, nothing scrolling.
    let mut planes = store.state().planes.clone();
    planes.x.visible = true;
    store.dispatch(Event::SlicingPlanesChanged(planes));

    // One user action, one wholesale-replacement event.
    let next = plane_policy::toggle_scroll(&store.state().planes, Axis::Y);
    store.dispatch(Event::SlicingPlanesChanged(next));

    let planes = &store.state().planes;
    assert!(planes.y.visible);
    assert!(planes.y.scroll);
    assert!(planes.x.visible);
    assert!(!planes.x.scroll);
    assert!(!planes.z.visible);
    assert!(!planes.z.scroll);
}

#[test]
fn hiding_a_scrolling_plane_clears_both_flags() {
    let mut store = Store::new(SessionState::new());
    store.dispatch(Event::SlicingPlanesChanged(plane_policy::toggle_scroll(
        &store.state().planes,
        Axis::Z,
    )));
    assert!(store.state().planes.z.scroll);

    store.dispatch(Event::SlicingPlanesChanged(plane_policy::toggle_visibility(
        &store.state().planes,
        Axis::Z,
    )));
    assert!(!store.state().planes.z.visible);
    assert!(!store.state().planes.z.scroll);
}

#[test]
fn component_switch_without_histogram_keeps_the_previous_one() -> Result<()> {
    let mut store = demo_store()?;
    let mut bridge = TransferFunctionBridge::new();
    bridge.mount(RecordingWidget::default());
    bridge.sync(store.state());

    // Component 1 has a lookup table and range but no histogram yet.
    let table = lut_presets::preset("Grayscale")
        .ok_or_else(|| anyhow::anyhow!("Grayscale preset missing"))?;
    store.dispatch_all([
        Event::LookupTableChanged { component: 1, table: Arc::new(table) },
        Event::ColorRangeBoundsChanged { component: 1, bounds: [0.0, 10.0] },
        Event::ColorRangeChanged { component: 1, range: [0.0, 10.0] },
        Event::SelectComponent(1),
    ]);
    bridge.sync(store.state());

    let widget = bridge.widget().unwrap();
    assert_eq!(widget.presets, vec!["Viridis", "Grayscale"]);
    assert_eq!(widget.histograms, vec![vec![3, 8, 5]]);

    store.dispatch(Event::HistogramChanged {
        component: 1,
        histogram: Arc::new(Histogram::new(vec![1, 1])),
    });
    bridge.sync(store.state());
    assert_eq!(
        bridge.widget().unwrap().histograms,
        vec![vec![3, 8, 5], vec![1, 1]]
    );
    Ok(())
}

#[test]
fn degenerate_bounds_never_reach_the_widget() -> Result<()> {
    let mut store = demo_store()?;
    let mut bridge = TransferFunctionBridge::new();
    bridge.mount(RecordingWidget::default());
    bridge.sync(store.state());

    store.dispatch_all([
        Event::ColorRangeBoundsChanged { component: 0, bounds: [7.0, 7.0] },
        Event::ColorRangeChanged { component: 0, range: [7.0, 7.0] },
    ]);
    bridge.sync(store.state());
    bridge.sync(store.state());

    // Only the initial finite range was forwarded.
    assert_eq!(bridge.widget().unwrap().ranges, vec![[0.25, 0.75]]);
    Ok(())
}
