//! Rounding helpers
//!
//! Engine arithmetic runs at full precision; values are rounded only when a
//! result leaves the engine.

/// Round half away from zero to `places` decimal places. Values too large to
/// scale have no fractional part left and pass through unchanged.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / scale;
    // normalise -0.0 so it serializes as 0
    if rounded == 0.0 { 0.0 } else { rounded }
}

pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}
