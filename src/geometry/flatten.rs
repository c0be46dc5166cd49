use std::f64::consts::{FRAC_PI_2, PI};

use crate::foundation::core::{Point, Vec2};
use crate::geometry::boundary::BoundarySpec;

/// Default absolute flattening tolerance in canvas units.
pub const DEFAULT_FLATTEN_TOLERANCE: f64 = 0.2;

/// Smallest accepted flattening tolerance; finer values are clamped up to it.
pub const MIN_FLATTEN_TOLERANCE: f64 = 1e-3;

/// Number of chords needed so a quarter arc of `radius` deviates from its chords by at most
/// `tolerance`.
pub(crate) fn quarter_arc_segments(radius: f64, tolerance: f64) -> usize {
    if radius <= 0.0 || !(tolerance > 0.0) || !tolerance.is_finite() {
        return 1;
    }
    let tolerance = tolerance.max(MIN_FLATTEN_TOLERANCE);
    if tolerance >= radius {
        return 1;
    }
    // Sagitta of a chord spanning `theta`: r * (1 - cos(theta / 2)) = 2r * sin^2(theta / 4).
    let max_theta = 4.0 * (tolerance / (2.0 * radius)).sqrt().asin();
    ((FRAC_PI_2 / max_theta).ceil() as usize).max(1)
}

/// Flatten a rounded-rectangle outline into a closed polyline.
///
/// The polyline starts at `(r, 0)`, runs clockwise in y-down coordinates and ends on the start
/// point again. Degenerate boundaries produce no points.
pub fn flatten_boundary(spec: &BoundarySpec, tolerance: f64) -> Vec<Point> {
    if spec.is_degenerate() {
        return Vec::new();
    }

    let w = spec.width();
    let h = spec.height();
    let r = spec.corner_radius();
    let n = quarter_arc_segments(r, tolerance);

    let mut out = Vec::with_capacity(4 * (n + 1) + 1);
    out.push(Point::new(r, 0.0));

    // Corner centres paired with their starting angle; each arc sweeps +90deg, which is
    // clockwise on screen with y pointing down.
    let corners = [
        (Point::new(w - r, r), -FRAC_PI_2, Point::new(w, h - r)),
        (Point::new(w - r, h - r), 0.0, Point::new(r, h)),
        (Point::new(r, h - r), FRAC_PI_2, Point::new(0.0, r)),
        (Point::new(r, r), PI, Point::new(r, 0.0)),
    ];

    for (center, start_angle, next_edge_end) in corners {
        let arc_start = center + Vec2::from_angle(start_angle) * r;
        push_distinct(&mut out, arc_start);
        if r > 0.0 {
            for i in 1..=n {
                let theta = start_angle + FRAC_PI_2 * (i as f64) / (n as f64);
                push_distinct(&mut out, center + Vec2::from_angle(theta) * r);
            }
        }
        push_distinct(&mut out, next_edge_end);
    }

    // Both the last arc and the final edge land on the start point; keep exactly one copy.
    if let (Some(first), Some(last)) = (out.first().copied(), out.last_mut()) {
        *last = first;
    }

    out
}

fn push_distinct(out: &mut Vec<Point>, p: Point) {
    if let Some(last) = out.last()
        && last.distance(p) <= 1e-9
    {
        return;
    }
    out.push(p);
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/flatten.rs"]
mod tests;
