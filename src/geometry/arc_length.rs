use crate::foundation::core::Point;
use crate::foundation::math::wrap_length;
use crate::geometry::boundary::BoundarySpec;
use crate::geometry::flatten::flatten_boundary;
use crate::geometry::resample::resample_closed;

const SEAM_EPSILON: f64 = 1e-9;

/// Cumulative arc-length table over a closed, resampled polyline.
///
/// `points`, `segment_lengths` and `cumulative` are parallel: segment `i` runs from
/// `points[i]` to `points[i + 1]`, has length `segment_lengths[i]` and ends at distance
/// `cumulative[i]` from the start. Zero-length segments are dropped on construction, so
/// `cumulative` is strictly increasing. The table is immutable once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArcLengthIndex {
    points: Vec<Point>,
    segment_lengths: Vec<f64>,
    cumulative: Vec<f64>,
}

impl ArcLengthIndex {
    /// Build the table from already resampled points.
    ///
    /// Fewer than two distinct points yield an empty ("not ready") index.
    pub fn new(points: &[Point]) -> Self {
        let mut out = Self {
            points: Vec::with_capacity(points.len()),
            segment_lengths: Vec::with_capacity(points.len().saturating_sub(1)),
            cumulative: Vec::with_capacity(points.len().saturating_sub(1)),
        };
        let mut total = 0.0;
        for &p in points {
            let Some(&last) = out.points.last() else {
                out.points.push(p);
                continue;
            };
            let len = last.distance(p);
            if !(len > 0.0) {
                continue;
            }
            total += len;
            out.points.push(p);
            out.segment_lengths.push(len);
            out.cumulative.push(total);
        }
        if out.segment_lengths.is_empty() {
            return Self::default();
        }
        out
    }

    /// Flatten, resample and index a boundary in one go.
    pub fn from_boundary(spec: &BoundarySpec, tolerance: f64, step: f64) -> Self {
        let raw = flatten_boundary(spec, tolerance);
        Self::new(&resample_closed(&raw, step))
    }

    /// `true` when there is no usable geometry.
    pub fn is_empty(&self) -> bool {
        self.segment_lengths.is_empty()
    }

    /// Total arc length; `0.0` for an empty index.
    pub fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Indexed points, including the closing copy of the first point.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Per-segment lengths.
    pub fn segment_lengths(&self) -> &[f64] {
        &self.segment_lengths
    }

    /// Running sum of segment lengths (segment end distances).
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Point at arc distance `d` and the index of the segment containing it.
    ///
    /// Callers wrap `d` into `[0, total)` first. Distances at or past the end (or NaN) fall back
    /// to the last point; negative distances clamp to the first point.
    pub fn point_at_distance(&self, d: f64) -> (Point, usize) {
        let Some(&last) = self.points.last() else {
            return (Point::ZERO, 0);
        };
        let n_segs = self.segment_lengths.len();
        if n_segs == 0 || d.is_nan() {
            return (last, n_segs.saturating_sub(1));
        }

        let i = self.cumulative.partition_point(|&c| c < d);
        if i >= n_segs {
            return (last, n_segs - 1);
        }

        let seg_start = if i == 0 { 0.0 } else { self.cumulative[i - 1] };
        let t = ((d - seg_start) / self.segment_lengths[i]).clamp(0.0, 1.0);
        (self.points[i].lerp(self.points[i + 1], t), i)
    }

    /// Centerline for `[start, end]`: the interpolated start, every stored point strictly
    /// inside the range, and the interpolated end. Empty when `end <= start`.
    pub fn points_in_range(&self, start: f64, end: f64) -> Vec<Point> {
        if !(end > start) || self.is_empty() {
            return Vec::new();
        }

        let (start_pt, start_seg) = self.point_at_distance(start);
        let (end_pt, end_seg) = self.point_at_distance(end);

        let mut out = Vec::with_capacity(end_seg.saturating_sub(start_seg) + 2);
        out.push(start_pt);
        for &p in self.points.iter().take(end_seg + 1).skip(start_seg + 1) {
            push_distinct(&mut out, p);
        }
        push_distinct(&mut out, end_pt);
        out
    }

    /// Centerline of a (possibly wrapped) window.
    ///
    /// A wrapped window is the concatenation of `[tail, total)` and `[0, head]`; the seam point
    /// appears exactly once.
    pub fn window_points(&self, window: &Window) -> Vec<Point> {
        if !window.is_wrapped() {
            return self.points_in_range(window.tail, window.head);
        }

        let mut out = self.points_in_range(window.tail, self.total_length());
        let second = self.points_in_range(0.0, window.head);
        let Some(&seam) = out.last() else {
            return second;
        };
        let mut rest = second.into_iter().peekable();
        rest.next_if(|p| p.distance(seam) <= SEAM_EPSILON);
        out.extend(rest);
        out
    }
}

fn push_distinct(out: &mut Vec<Point>, p: Point) {
    if let Some(last) = out.last()
        && last.distance(p) <= SEAM_EPSILON
    {
        return;
    }
    out.push(p);
}

/// Visible `(tail, head)` arc-length range of the trail.
///
/// Derived each frame from the head position, never stored. When `tail > head` the window
/// wraps through the seam and spans `[tail, total) ∪ [0, head]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Window {
    /// Trailing end, in `[0, total)`.
    pub tail: f64,
    /// Leading end, in `[0, total)`.
    pub head: f64,
    /// Arc length covered by the window.
    pub length: f64,
}

impl Window {
    /// Window of `fraction * total` ending at `head`. `None` when there is no geometry.
    pub fn trailing(head: f64, total: f64, fraction: f64) -> Option<Self> {
        if !(total > 0.0) {
            return None;
        }
        let length = total * fraction.clamp(0.0, 1.0);
        let head = wrap_length(head, total);
        let tail = if length >= total {
            head
        } else {
            wrap_length(head - length, total)
        };
        Some(Self { tail, head, length })
    }

    /// `true` when the window crosses the seam at distance zero.
    pub fn is_wrapped(&self) -> bool {
        self.tail > self.head || (self.length > 0.0 && self.tail == self.head)
    }

    /// Arc length from tail to head, accounting for wraparound.
    pub fn span(&self, total: f64) -> f64 {
        if self.is_wrapped() {
            total - self.tail + self.head
        } else {
            self.head - self.tail
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/arc_length.rs"]
mod tests;
