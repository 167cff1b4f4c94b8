//! Custom "unchanged" comparators for derived views.
//!
//! Each comparator returns true when two derived views should be treated as
//! the same, suppressing effect re-invocation for reconstructed-but-
//! equivalent values.

use crate::state::{Histogram, LookupTable};
use std::sync::Arc;

/// Elementwise bit equality over an optional `[f64; 2]` pair.
///
/// Comparing bits instead of values keeps a repeated NaN pair (degenerate
/// range bounds) counted as unchanged, so a stuck-degenerate state does not
/// re-fire its effect on every transition.
pub fn range_pair_unchanged(previous: &Option<[f64; 2]>, next: &Option<[f64; 2]>) -> bool {
    match (previous, next) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a[0].to_bits() == b[0].to_bits() && a[1].to_bits() == b[1].to_bits()
        }
        _ => false,
    }
}

/// Lookup tables compare by preset name, not by allocation.
///
/// The state machine may rebuild an equivalent table object; only a preset
/// switch is a meaningful change for the widget.
pub fn lookup_table_unchanged(
    previous: &Option<Arc<LookupTable>>,
    next: &Option<Arc<LookupTable>>,
) -> bool {
    match (previous, next) {
        (None, None) => true,
        (Some(a), Some(b)) => a.preset_name() == b.preset_name(),
        _ => false,
    }
}

/// Histograms compare by identity.
///
/// Histograms are immutable once computed and shared behind `Arc`, so
/// pointer identity is both cheap and exact.
pub fn histogram_unchanged(
    previous: &Option<Arc<Histogram>>,
    next: &Option<Arc<Histogram>>,
) -> bool {
    match (previous, next) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}
