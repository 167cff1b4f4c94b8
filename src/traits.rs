//! External widget contract.
//!
//! The transfer-function widget is an externally owned, stateful
//! collaborator; this trait is its entire interface boundary. Rendering
//! algorithms and color-mapping internals belong to the implementor.

use crate::state::{Histogram, LookupTable};

/// The imperative surface of the transfer-function widget.
///
/// Every method is idempotent: calling it again with the same value must be
/// safe and observably a no-op. The effect bridge relies on this when it
/// re-applies the latest known values after deferred construction.
pub trait TransferFunctionView {
    /// Installs the color transfer function derived from a lookup table.
    fn set_color_transfer_function(&mut self, table: &LookupTable);

    /// Sets the displayed range window, both components normalized to [0, 1].
    ///
    /// Callers guarantee both components are finite.
    fn set_range_zoom(&mut self, range: [f64; 2]);

    /// Installs the histogram backdrop.
    fn set_histogram(&mut self, histogram: &Histogram);
}
