use crate::foundation::core::{BezPath, Point, Vec2};
use crate::foundation::math::lerp;

/// Tangents with a squared length below this reuse the previous direction.
const DEGENERATE_TANGENT_SQ: f64 = 1e-6;

/// Stroke width across the trail, as a function of window-relative position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThicknessProfile {
    /// Thin at both ends, widest at the middle of the window.
    #[default]
    Tent,
    /// Constant `max_thickness` along the whole window.
    Uniform,
}

impl ThicknessProfile {
    /// Shape factor in `[0, 1]` at window-relative `t` (0 = tail, 1 = head).
    pub fn shape(self, t: f64) -> f64 {
        match self {
            Self::Tent => (1.0 - 2.0 * (t - 0.5).abs()).max(0.0),
            Self::Uniform => 1.0,
        }
    }

    /// Full stroke thickness at `t`.
    pub fn thickness(self, t: f64, min_thickness: f64, max_thickness: f64) -> f64 {
        lerp(min_thickness, max_thickness, self.shape(t))
    }
}

/// Closed, filled outline of the trail: left edge tail→head, then right edge head→tail.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StripPolygon {
    points: Vec<Point>,
}

impl StripPolygon {
    /// Outline vertices in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of centerline samples the strip was built from.
    pub fn centerline_len(&self) -> usize {
        self.points.len() / 2
    }

    /// Left-hand boundary, tail to head.
    pub fn left(&self) -> &[Point] {
        &self.points[..self.centerline_len()]
    }

    /// Right-hand boundary, head to tail.
    pub fn right(&self) -> &[Point] {
        &self.points[self.centerline_len()..]
    }

    /// Closed path for fill-based painters.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut it = self.points.iter();
        if let Some(&first) = it.next() {
            path.move_to(first);
            for &p in it {
                path.line_to(p);
            }
            path.close_path();
        }
        path
    }
}

/// Build a tapered strip around `centers`.
///
/// Returns `None` for fewer than two centerline points.
pub fn build_strip(
    centers: &[Point],
    min_thickness: f64,
    max_thickness: f64,
    profile: ThicknessProfile,
) -> Option<StripPolygon> {
    let n = centers.len();
    if n < 2 {
        return None;
    }

    let mut left = Vec::with_capacity(n);
    let mut right = Vec::with_capacity(n);
    let mut last_dir = Vec2::new(1.0, 0.0);

    for (i, &p) in centers.iter().enumerate() {
        let tangent = if i == 0 {
            centers[1] - centers[0]
        } else if i == n - 1 {
            centers[n - 1] - centers[n - 2]
        } else {
            (centers[i] - centers[i - 1]) + (centers[i + 1] - centers[i])
        };

        let dir = if tangent.hypot2() < DEGENERATE_TANGENT_SQ {
            last_dir
        } else {
            let d = tangent.normalize();
            last_dir = d;
            d
        };
        let normal = Vec2::new(-dir.y, dir.x);

        let t = i as f64 / (n - 1) as f64;
        let half = profile.thickness(t, min_thickness, max_thickness) * 0.5;

        left.push(p + normal * half);
        right.push(p - normal * half);
    }

    left.extend(right.into_iter().rev());
    Some(StripPolygon { points: left })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/strip.rs"]
mod tests;
