use std::f64::consts::FRAC_PI_2;

use crate::foundation::core::{Rect, RoundedRect};

/// Closed rounded-rectangle boundary the trail travels along.
///
/// The rectangle is anchored at the origin in y-down screen coordinates. The corner radius is
/// clamped into `[0, min(width, height) / 2]` on construction so opposite arcs never overlap.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundarySpec {
    width: f64,
    height: f64,
    corner_radius: f64,
}

/// One straight edge or quarter arc of a [`BoundarySpec`], in traversal order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryPiece {
    /// Straight edge of the given length.
    Edge(f64),
    /// Quarter-circle corner of the given arc length.
    Corner(f64),
}

impl BoundaryPiece {
    /// Arc length of this piece.
    pub fn length(self) -> f64 {
        match self {
            Self::Edge(l) | Self::Corner(l) => l,
        }
    }
}

impl BoundarySpec {
    /// Build a boundary, clamping the corner radius.
    pub fn new(width: f64, height: f64, corner_radius: f64) -> Self {
        let width = if width.is_finite() { width } else { 0.0 };
        let height = if height.is_finite() { height } else { 0.0 };
        let max_r = (width.min(height) * 0.5).max(0.0);
        let corner_radius = if corner_radius.is_finite() {
            corner_radius.clamp(0.0, max_r)
        } else {
            0.0
        };
        Self {
            width,
            height,
            corner_radius,
        }
    }

    /// Width in canvas units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in canvas units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Corner radius after clamping.
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// `true` when the boundary encloses no area and yields no geometry.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// The eight pieces of the outline starting at `(r, 0)` and running clockwise:
    /// top edge, top-right corner, right edge, bottom-right corner, bottom edge,
    /// bottom-left corner, left edge, top-left corner.
    pub fn pieces(&self) -> [BoundaryPiece; 8] {
        let r = self.corner_radius;
        let horiz = (self.width - 2.0 * r).max(0.0);
        let vert = (self.height - 2.0 * r).max(0.0);
        let arc = FRAC_PI_2 * r;
        [
            BoundaryPiece::Edge(horiz),
            BoundaryPiece::Corner(arc),
            BoundaryPiece::Edge(vert),
            BoundaryPiece::Corner(arc),
            BoundaryPiece::Edge(horiz),
            BoundaryPiece::Corner(arc),
            BoundaryPiece::Edge(vert),
            BoundaryPiece::Corner(arc),
        ]
    }

    /// Exact perimeter of the rounded rectangle.
    pub fn perimeter(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        self.pieces().iter().map(|p| p.length()).sum()
    }

    /// The same outline as a `kurbo` shape, for painting the static border.
    pub fn to_rounded_rect(&self) -> RoundedRect {
        RoundedRect::from_rect(
            Rect::new(0.0, 0.0, self.width.max(0.0), self.height.max(0.0)),
            self.corner_radius,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/boundary.rs"]
mod tests;
