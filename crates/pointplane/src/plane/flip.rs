//! Reflection across an axis: `c ↦ dim(axis) - c`.
//!
//! Typical use is converting a y-up plane into y-down image rows before
//! handing points to a renderer. The subtraction wraps on overflow, so the
//! reflection stays an involution for every `i64` coordinate.

use crate::point::{Axis, Point};
use crate::set::PointSet;

use super::Plane;

#[inline]
fn reflect(p: Point, axis: Axis, max: i64) -> Point {
    p.with_coord(axis, max.wrapping_sub(p.coord(axis)))
}

impl Plane {
    #[inline]
    fn axis_max(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.dimensions.0,
            Axis::Y => self.dimensions.1,
        }
    }

    /// Reflect every stored point on `axis`.
    ///
    /// The reflected set is built separately and swapped in whole; the stored
    /// set is never read while being mutated.
    pub fn flip(&mut self, axis: Axis) {
        let max = self.axis_max(axis);
        let flipped: PointSet = self.data.iter().map(|p| reflect(p, axis, max)).collect();
        self.data = flipped;
    }

    /// Reflect a standalone sequence with this plane's size; input order is kept
    /// and the stored points are untouched.
    pub fn flip_points(&self, points: &[Point], axis: Axis) -> Vec<Point> {
        let max = self.axis_max(axis);
        points.iter().map(|p| reflect(*p, axis, max)).collect()
    }
}
