//! Deduplicating point containers.
//!
//! - `PointSet`: plain owned set, the storage behind `Plane` and the
//!   accumulator used while rasterizing.
//! - `SyncPointSet`: the same operations through `&self`, for callers that
//!   share one set between threads.
//!
//! Iteration order of both is unspecified and may differ between calls.

mod sync;

use std::collections::hash_set;
use std::collections::HashSet;

use crate::point::Point;

pub use sync::SyncPointSet;

/// Unordered set of points.
///
/// Invariant: no coordinate pair is stored twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    data: HashSet<Point>,
}

impl PointSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `point`; no-op if already present.
    #[inline]
    pub fn add(&mut self, point: Point) {
        self.data.insert(point);
    }

    pub fn add_all(&mut self, points: &[Point]) {
        self.data.extend(points.iter().copied());
    }

    /// Delete `point`; no-op if absent.
    #[inline]
    pub fn remove(&mut self, point: Point) {
        self.data.remove(&point);
    }

    pub fn remove_all(&mut self, points: &[Point]) {
        for p in points {
            self.data.remove(p);
        }
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.data.contains(&point)
    }

    /// True iff every element of `points` is a member (short-circuits on the first miss).
    pub fn contains_all(&self, points: &[Point]) -> bool {
        points.iter().all(|p| self.data.contains(p))
    }

    /// Detached snapshot of the current members, in unspecified order.
    pub fn to_vec(&self) -> Vec<Point> {
        self.data.iter().copied().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.data.iter(),
        }
    }

    /// Componentwise `(min, max)` corners of the stored points; `None` when empty.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut it = self.data.iter();
        let first = *it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

/// Borrowing iterator over a `PointSet`, yielding points by value.
pub struct Iter<'a> {
    inner: hash_set::Iter<'a, Point>,
}

impl Iterator for Iter<'_> {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for PointSet {
    type Item = Point;
    type IntoIter = hash_set::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}
