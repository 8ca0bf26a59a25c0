use std::fmt;

use crate::point::Point;

/// Errors surfaced by strict plane mutators and axis parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaneError {
    /// Strict write saw a point outside `[0, width] × [0, height]`; nothing was written.
    OutOfBounds {
        point: Point,
        dimensions: (i64, i64),
    },
    /// Strict erase saw a point the plane does not hold; nothing was removed.
    NotFound { point: Point },
    /// Axis index other than 0 (x) or 1 (y).
    InvalidAxis { index: usize },
}

impl fmt::Display for PlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaneError::OutOfBounds { point, dimensions } => write!(
                f,
                "point {} lies outside the plane [0, {}] x [0, {}]",
                point, dimensions.0, dimensions.1
            ),
            PlaneError::NotFound { point } => write!(f, "point {} is not on the plane", point),
            PlaneError::InvalidAxis { index } => {
                write!(f, "axis index {index} is invalid (expected 0 or 1)")
            }
        }
    }
}

impl std::error::Error for PlaneError {}
