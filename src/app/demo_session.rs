//! Synthetic demo session.
//!
//! Builds an in-memory two-component session so the viewer is interactive
//! without an attached image pipeline. The second component deliberately
//! starts without a histogram, exercising the absent-data path end to end.

use anyhow::{Context, Result};
use rand::Rng;
use rviv::presentation::lut_presets;
use rviv::{Axis, ComponentId, Histogram, SessionState};
use std::sync::Arc;

const HISTOGRAM_BINS: usize = 64;

/// Builds the demo session: a 100-cube volume with two image components.
pub fn build_demo_session() -> Result<SessionState> {
    let mut state = SessionState::new();

    for axis in Axis::ALL {
        let plane = state.planes.get_mut(axis);
        plane.min = 0.0;
        plane.max = 99.0;
        plane.step = 1.0;
        plane.current_value = 49.0;
    }
    state.planes.x.visible = true;

    let components: [(ComponentId, &str, [f64; 2]); 2] = [
        (0, "Viridis", [0.0, 1000.0]),
        (1, "Grayscale", [-100.0, 400.0]),
    ];
    for (component, preset, bounds) in components {
        let table = lut_presets::preset(preset)
            .with_context(|| format!("unknown lookup table preset '{preset}'"))?;
        state.images.set_lookup_table(component, Arc::new(table));
        state.images.set_color_range_bounds(component, bounds);
        let quarter = (bounds[1] - bounds[0]) / 4.0;
        state
            .images
            .set_color_range(component, [bounds[0] + quarter, bounds[1] - quarter]);
    }

    // Component 1 starts without a histogram; the widget keeps showing the
    // previous one until it arrives.
    state.images.set_histogram(0, Arc::new(synthetic_histogram()));
    state.images.select_component(0);

    Ok(state)
}

/// Roughly bell-shaped bin counts with noise.
fn synthetic_histogram() -> Histogram {
    let mut rng = rand::thread_rng();
    let half = HISTOGRAM_BINS as f64 / 2.0;
    let counts = (0..HISTOGRAM_BINS)
        .map(|bin| {
            let center_distance = (bin as f64 - half).abs() / half;
            let base = (1.0 - center_distance) * 800.0;
            (base + rng.gen_range(0.0..200.0)) as u32
        })
        .collect();
    Histogram::new(counts)
}
