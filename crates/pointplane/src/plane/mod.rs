//! Bounded coordinate space owning a `PointSet`.
//!
//! Purpose
//! - Store rasterized shapes and hand them back as unordered snapshots.
//! - Provide the geometry operations (join, fill, flip) next to the storage
//!   they usually feed.
//!
//! Bounds policy
//! - The plane does not force stored points into its box. Only strict writes
//!   check `[0, width] × [0, height]` (inclusive on both ends).
//! - Strict writes and erases validate the whole batch before committing any
//!   of it.

mod error;
mod fill;
mod flip;
mod join;

pub use error::PlaneError;
pub use fill::{join_and_fill_points, scan_bounds, ScanBox};
pub use join::join_points;

use crate::point::Point;
use crate::set::PointSet;

/// Fixed-size plane of integer points.
///
/// Invariants:
/// - `dimensions` is set by `new` and never changes.
/// - The plane exclusively owns its `PointSet`.
#[derive(Clone, Debug)]
pub struct Plane {
    data: PointSet,
    dimensions: (i64, i64),
}

impl Plane {
    /// Empty plane of `(width, height)`.
    pub fn new(dimensions: (i64, i64)) -> Self {
        Self {
            data: PointSet::new(),
            dimensions,
        }
    }

    #[inline]
    pub fn dimensions(&self) -> (i64, i64) {
        self.dimensions
    }

    /// Strict-write predicate: `0 <= x <= width` and `0 <= y <= height`.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        let (w, h) = self.dimensions;
        (0..=w).contains(&p.x) && (0..=h).contains(&p.y)
    }

    /// Add `points`. With `strict`, the whole batch is rejected if any point is
    /// out of bounds; the error names the first such point.
    pub fn write_points(&mut self, points: &[Point], strict: bool) -> Result<(), PlaneError> {
        if strict {
            if let Some(&point) = points.iter().find(|p| !self.in_bounds(**p)) {
                return Err(PlaneError::OutOfBounds {
                    point,
                    dimensions: self.dimensions,
                });
            }
        }
        self.data.add_all(points);
        Ok(())
    }

    /// Remove `points`. With `strict`, the whole batch is rejected if any point
    /// is absent; the error names the first such point.
    pub fn erase_points(&mut self, points: &[Point], strict: bool) -> Result<(), PlaneError> {
        if strict {
            if let Some(&point) = points.iter().find(|p| !self.data.contains(**p)) {
                return Err(PlaneError::NotFound { point });
            }
        }
        self.data.remove_all(points);
        Ok(())
    }

    /// All stored points, unordered.
    pub fn read_points(&self) -> Vec<Point> {
        self.data.to_vec()
    }

    /// Stored points satisfying `pred`; `pred` runs once per point, in unspecified order.
    pub fn read_points_by_filter<F>(&self, mut pred: F) -> Vec<Point>
    where
        F: FnMut(Point) -> bool,
    {
        self.data.iter().filter(|p| pred(*p)).collect()
    }

    /// Borrow the underlying set.
    #[inline]
    pub fn points(&self) -> &PointSet {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Rasterized outline of the polyline through `vertices`. See [`join_points`].
    pub fn join_points(&self, vertices: &[Point]) -> Vec<Point> {
        join_points(vertices)
    }

    /// Outline plus best-effort interior. See [`join_and_fill_points`].
    pub fn join_and_fill_points(&self, vertices: &[Point]) -> Vec<Point> {
        join_and_fill_points(vertices)
    }
}
