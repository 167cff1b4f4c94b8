//! Per-component image state.
//!
//! This module encapsulates everything the session knows about the loaded
//! image: one lookup table, color range, color range bounds and histogram
//! per image component, plus the currently selected component.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Identifier of an image component (channel) within the loaded image.
pub type ComponentId = u32;

/// A named color lookup table: ordered RGB stops sampled linearly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupTable {
    preset: String,
    stops: Vec<[f32; 3]>,
}

impl LookupTable {
    /// Creates a lookup table from a preset name and its color stops.
    pub fn new(preset: impl Into<String>, stops: Vec<[f32; 3]>) -> Self {
        Self { preset: preset.into(), stops }
    }

    /// Returns the preset name this table was built from.
    ///
    /// Two tables with the same preset name are treated as equivalent by the
    /// selector layer, even if they are distinct allocations.
    pub fn preset_name(&self) -> &str {
        &self.preset
    }

    /// Returns the raw color stops.
    pub fn stops(&self) -> &[[f32; 3]] {
        &self.stops
    }

    /// Samples the table at `t` in [0, 1] with linear interpolation.
    ///
    /// Out-of-range inputs clamp to the first/last stop. An empty table
    /// samples to black.
    pub fn sample(&self, t: f32) -> [f32; 3] {
        if self.stops.is_empty() {
            return [0.0, 0.0, 0.0];
        }
        if self.stops.len() == 1 {
            return self.stops[0];
        }
        let t = t.clamp(0.0, 1.0);
        let scaled = t * (self.stops.len() - 1) as f32;
        let lower = scaled.floor() as usize;
        let upper = (lower + 1).min(self.stops.len() - 1);
        let frac = scaled - lower as f32;
        let a = self.stops[lower];
        let b = self.stops[upper];
        [
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
        ]
    }
}

/// Intensity histogram of one image component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    counts: Vec<u32>,
}

impl Histogram {
    /// Creates a histogram from per-bin counts.
    pub fn new(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    /// Returns the per-bin counts.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Returns the largest bin count, or zero for an empty histogram.
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Returns true if the histogram has no bins.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// State related to the loaded image and its components.
///
/// Responsibilities:
/// - Tracking per-component lookup tables, color ranges, bounds, histograms
/// - Tracking which component is selected for editing
///
/// Any of the per-component maps may be missing an entry for the selected
/// component (e.g. a histogram not yet computed); readers must treat that as
/// an explicit absence, not an error.
#[derive(Debug, Clone, Default)]
pub struct ImageState {
    lookup_tables: HashMap<ComponentId, Arc<LookupTable>>,
    color_ranges: HashMap<ComponentId, [f64; 2]>,
    color_range_bounds: HashMap<ComponentId, [f64; 2]>,
    histograms: HashMap<ComponentId, Arc<Histogram>>,
    selected_component: Option<ComponentId>,
}

impl ImageState {
    /// Creates an empty image state with no components.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    /// Returns the selected component, if any.
    pub fn selected_component(&self) -> Option<ComponentId> {
        self.selected_component
    }

    /// Returns the lookup table for a component, if loaded.
    pub fn lookup_table(&self, component: ComponentId) -> Option<&Arc<LookupTable>> {
        self.lookup_tables.get(&component)
    }

    /// Returns the current color range (window) for a component.
    pub fn color_range(&self, component: ComponentId) -> Option<[f64; 2]> {
        self.color_ranges.get(&component).copied()
    }

    /// Returns the full-extent color range bounds for a component.
    pub fn color_range_bounds(&self, component: ComponentId) -> Option<[f64; 2]> {
        self.color_range_bounds.get(&component).copied()
    }

    /// Returns the histogram for a component, if computed.
    pub fn histogram(&self, component: ComponentId) -> Option<&Arc<Histogram>> {
        self.histograms.get(&component)
    }

    /// Returns all known component ids in ascending order.
    pub fn component_ids(&self) -> Vec<ComponentId> {
        let mut ids: Vec<ComponentId> = self
            .lookup_tables
            .keys()
            .chain(self.color_ranges.keys())
            .chain(self.histograms.keys())
            .copied()
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    // ===== Mutations (called from the store reducer) =====

    /// Selects a component for editing.
    pub fn select_component(&mut self, component: ComponentId) {
        self.selected_component = Some(component);
    }

    /// Installs or replaces the lookup table for a component.
    pub fn set_lookup_table(&mut self, component: ComponentId, table: Arc<LookupTable>) {
        self.lookup_tables.insert(component, table);
    }

    /// Sets the current color range (window) for a component.
    pub fn set_color_range(&mut self, component: ComponentId, range: [f64; 2]) {
        self.color_ranges.insert(component, range);
    }

    /// Sets the full-extent color range bounds for a component.
    pub fn set_color_range_bounds(&mut self, component: ComponentId, bounds: [f64; 2]) {
        self.color_range_bounds.insert(component, bounds);
    }

    /// Installs or replaces the histogram for a component.
    pub fn set_histogram(&mut self, component: ComponentId, histogram: Arc<Histogram>) {
        self.histograms.insert(component, histogram);
    }
}
