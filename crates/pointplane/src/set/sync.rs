//! Lock-backed point set for shared, concurrent mutation.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::PointSet;
use crate::point::Point;

/// `PointSet` operations through `&self`, guarded by an `RwLock`.
///
/// Bulk mutators hold the write lock for the whole batch, so other callers
/// observe either none or all of a batch. A poisoned lock is recovered: a
/// panicking writer cannot leave a `HashSet` with duplicate entries.
#[derive(Debug, Default)]
pub struct SyncPointSet {
    data: RwLock<HashSet<Point>>,
}

impl SyncPointSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashSet<Point>> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashSet<Point>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, point: Point) {
        self.write().insert(point);
    }

    pub fn add_all(&self, points: &[Point]) {
        self.write().extend(points.iter().copied());
    }

    pub fn remove(&self, point: Point) {
        self.write().remove(&point);
    }

    pub fn remove_all(&self, points: &[Point]) {
        let mut guard = self.write();
        for p in points {
            guard.remove(p);
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.read().contains(&point)
    }

    pub fn contains_all(&self, points: &[Point]) -> bool {
        let guard = self.read();
        points.iter().all(|p| guard.contains(p))
    }

    pub fn to_vec(&self) -> Vec<Point> {
        self.read().iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Owned, unsynchronized copy of the current members.
    pub fn snapshot(&self) -> PointSet {
        self.read().iter().copied().collect()
    }
}

impl From<PointSet> for SyncPointSet {
    fn from(set: PointSet) -> Self {
        Self {
            data: RwLock::new(set.into_iter().collect()),
        }
    }
}
