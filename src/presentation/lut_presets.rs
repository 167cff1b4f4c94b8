//! Built-in lookup table presets.
//!
//! Small named color-stop tables sampled linearly by the widget. The stop
//! counts are deliberately coarse; smooth interpolation is the widget's
//! concern.

use crate::state::LookupTable;
use once_cell::sync::Lazy;

static PRESETS: Lazy<Vec<LookupTable>> = Lazy::new(|| {
    vec![
        LookupTable::new("Grayscale", vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]),
        LookupTable::new(
            "Viridis",
            vec![
                [0.267, 0.005, 0.329],
                [0.283, 0.141, 0.458],
                [0.254, 0.265, 0.530],
                [0.164, 0.471, 0.558],
                [0.128, 0.567, 0.551],
                [0.135, 0.659, 0.518],
                [0.478, 0.821, 0.318],
                [0.993, 0.906, 0.144],
            ],
        ),
        LookupTable::new(
            "Inferno",
            vec![
                [0.001, 0.000, 0.014],
                [0.186, 0.040, 0.347],
                [0.472, 0.110, 0.428],
                [0.735, 0.216, 0.330],
                [0.929, 0.412, 0.145],
                [0.988, 0.645, 0.040],
                [0.988, 0.998, 0.645],
            ],
        ),
        LookupTable::new(
            "Cool Warm",
            vec![
                [0.230, 0.299, 0.754],
                [0.865, 0.865, 0.865],
                [0.706, 0.016, 0.150],
            ],
        ),
    ]
});

/// Returns the preset with the given name, cloned for installation into the
/// session. Names are case-sensitive; unknown names yield `None`.
pub fn preset(name: &str) -> Option<LookupTable> {
    PRESETS.iter().find(|table| table.preset_name() == name).cloned()
}

/// Returns all preset names in declaration order.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|table| table.preset_name()).collect()
}
