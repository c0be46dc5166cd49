/// Fractional part wrapped into `[0, 1)`.
pub(crate) fn wrap_unit(x: f64) -> f64 {
    let f = x - x.floor();
    // `x - floor(x)` can round up to exactly 1.0 for tiny negative inputs.
    if f >= 1.0 { 0.0 } else { f }
}

/// Wrap a distance into `[0, total)`. Non-positive totals map to 0.
pub(crate) fn wrap_length(d: f64, total: f64) -> f64 {
    if total <= 0.0 || !d.is_finite() {
        return 0.0;
    }
    let w = d.rem_euclid(total);
    if w >= total { 0.0 } else { w }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
