//! Integer coordinate pairs and axis selection.

use std::fmt;

use crate::plane::PlaneError;

/// A dimensionless integer coordinate pair.
///
/// Invariants:
/// - Equality and hashing are structural on `(x, y)`; two points with equal
///   coordinates are indistinguishable and collapse under set insertion.
/// - `Ord` is lexicographic `(x, y)`. The core never relies on it; it exists so
///   callers can sort unordered snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Coordinate on `axis`.
    #[inline]
    pub fn coord(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Copy of `self` with the coordinate on `axis` replaced by `value`.
    #[inline]
    pub fn with_coord(self, axis: Axis, value: i64) -> Self {
        match axis {
            Axis::X => Self { x: value, ..self },
            Axis::Y => Self { y: value, ..self },
        }
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i64, i64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Coordinate axis of a plane: `X` is index 0, `Y` is index 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
}

impl Axis {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Axis {
    type Error = PlaneError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            _ => Err(PlaneError::InvalidAxis { index }),
        }
    }
}
