//! Backdrop opacity derived from the sheet offset.

/// Maps an offset to backdrop opacity by linear interpolation.
///
/// Returns `1.0` at `open_value`, `0.0` at `closed_value`, and clamps values
/// outside the interval. A zero-length interval yields `0.0`.
///
/// Always call with the live offset (including mid-drag values), never with
/// an animation target.
#[must_use]
pub fn backdrop_opacity(offset: f64, open_value: f64, closed_value: f64) -> f64 {
    let span = closed_value - open_value;
    if span.abs() < f64::EPSILON || !offset.is_finite() {
        return 0.0;
    }
    ((closed_value - offset) / span).clamp(0.0, 1.0)
}
