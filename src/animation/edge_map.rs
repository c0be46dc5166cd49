use crate::foundation::math::{lerp, wrap_length, wrap_unit};
use crate::geometry::boundary::BoundarySpec;

/// Maps loop progress to arc distance so every edge and corner gets the same share of time.
///
/// Piece lengths come from the analytic outline and are rescaled to the indexed path length,
/// so the mapping lines up with the flattened geometry. Zero-length pieces (sharp corners,
/// edges of a circle) are skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeTimeMap {
    ends: Vec<f64>,
}

impl EdgeTimeMap {
    /// Build the mapping for `spec`, scaled so the final piece ends at `total_length`.
    pub fn new(spec: &BoundarySpec, total_length: f64) -> Self {
        let perimeter = spec.perimeter();
        if !(perimeter > 0.0) || !(total_length > 0.0) {
            return Self::default();
        }
        let scale = total_length / perimeter;
        let mut acc = 0.0;
        let ends = spec
            .pieces()
            .iter()
            .map(|p| p.length())
            .filter(|&l| l > 0.0)
            .map(|l| {
                acc += l * scale;
                acc
            })
            .collect::<Vec<_>>();
        Self { ends }
    }

    /// Number of pieces sharing the loop time.
    pub fn piece_count(&self) -> usize {
        self.ends.len()
    }

    /// Arc distance reached at loop progress `progress` (wrapped into `[0, 1)`).
    pub fn distance_at(&self, progress: f64) -> f64 {
        let k = self.ends.len();
        if k == 0 {
            return 0.0;
        }
        let scaled = wrap_unit(progress) * k as f64;
        let idx = (scaled.floor() as usize).min(k - 1);
        let local = scaled - idx as f64;
        let start = if idx == 0 { 0.0 } else { self.ends[idx - 1] };
        lerp(start, self.ends[idx], local)
    }

    /// Loop progress at which the head sits at arc `distance`; inverse of
    /// [`EdgeTimeMap::distance_at`].
    pub fn progress_at(&self, distance: f64) -> f64 {
        let Some(&total) = self.ends.last() else {
            return 0.0;
        };
        let k = self.ends.len();
        let d = wrap_length(distance, total);
        let idx = self.ends.partition_point(|&e| e < d).min(k - 1);
        let start = if idx == 0 { 0.0 } else { self.ends[idx - 1] };
        let len = self.ends[idx] - start;
        let local = if len > 0.0 {
            ((d - start) / len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        wrap_unit((idx as f64 + local) / k as f64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/edge_map.rs"]
mod tests;
