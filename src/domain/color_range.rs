//! Color range math.

/// Normalizes a color range (current window) against its full-extent bounds.
///
/// Returns `[(low - min) / width, (high - min) / width]`, the fraction of the
/// full range the current window covers. For any window inside nonzero-width
/// bounds the result lies in [0, 1] with `low <= high`.
///
/// Degenerate zero-width bounds are a caller error surfaced as non-finite
/// output (NaN or infinity); consumers must detect and skip such values
/// rather than forward them to a widget.
pub fn normalized_range(current: [f64; 2], bounds: [f64; 2]) -> [f64; 2] {
    let width = bounds[1] - bounds[0];
    [
        (current[0] - bounds[0]) / width,
        (current[1] - bounds[0]) / width,
    ]
}
