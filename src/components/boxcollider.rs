//! Axis-aligned collision rectangle used by every spatial query.
//!
//! Overlap is strict: two boxes that only share an edge do **not** overlap,
//! and a point (zero-sized box) lying exactly on a boundary is not inside.
//! The movement resolver relies on this to park entities flush against walls.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CollisionBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CollisionBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Degenerate box used by the point query variants.
    pub fn point(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }

    /// Returns (min_x, min_y, max_x, max_y).
    /// Handles negative size by normalizing to proper min/max.
    pub fn extents(&self) -> (f32, f32, f32, f32) {
        let x1 = self.x + self.width;
        let y1 = self.y + self.height;
        (self.x.min(x1), self.y.min(y1), self.x.max(x1), self.y.max(y1))
    }

    pub fn left(&self) -> f32 {
        self.extents().0
    }

    pub fn right(&self) -> f32 {
        self.extents().2
    }

    pub fn bottom(&self) -> f32 {
        self.extents().1
    }

    pub fn top(&self) -> f32 {
        self.extents().3
    }

    /// AABB vs AABB overlap test. Touching edges do not count.
    pub fn overlaps(&self, other: &Self) -> bool {
        let (ax0, ay0, ax1, ay1) = self.extents();
        let (bx0, by0, bx1, by1) = other.extents();
        ax0 < bx1 && ax1 > bx0 && ay0 < by1 && ay1 > by0
    }

    /// True when the vertical extents strictly intersect.
    pub fn overlaps_y(&self, other: &Self) -> bool {
        self.bottom() < other.top() && self.top() > other.bottom()
    }

    /// True when the horizontal extents strictly intersect.
    pub fn overlaps_x(&self, other: &Self) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
