use crate::foundation::core::Point;

/// Default resampling step in canvas units.
pub const DEFAULT_RESAMPLE_STEP: f64 = 1.0;

/// Closing segments shorter than this are treated as already closed.
pub(crate) const CLOSE_EPSILON: f64 = 0.01;

/// Re-space `raw` so consecutive points sit exactly `step` apart, then close the loop.
///
/// Leftover distance at the end of each raw segment carries into the next one, so spacing does
/// not drift across corners. Only the closing segment back to the first point may be shorter
/// than `step`. Fewer than two input points, or a non-positive step, yield no points.
pub fn resample_closed(raw: &[Point], step: f64) -> Vec<Point> {
    if raw.len() < 2 || !(step > 0.0) || !step.is_finite() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(raw.len());
    out.push(raw[0]);

    let mut acc = 0.0;
    for pair in raw.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let seg_len = a.distance(b);
        if seg_len <= 0.0 {
            continue;
        }
        let dir = (b - a) / seg_len;

        let mut t = 0.0;
        while t + step - acc <= seg_len {
            t += step - acc;
            out.push(a + dir * t);
            acc = 0.0;
        }
        acc += seg_len - t;
    }

    if let (Some(&first), Some(&last)) = (out.first(), out.last())
        && last.distance(first) > CLOSE_EPSILON
    {
        out.push(first);
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/resample.rs"]
mod tests;
