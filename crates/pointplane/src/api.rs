//! Curated surface for the command-line runner and benches.
//!
//! Everything here is a re-export; the modules themselves stay the source of
//! truth. Prefer `prelude` for everyday imports.

// Storage
pub use crate::plane::{Plane, PlaneError};
pub use crate::set::{PointSet, SyncPointSet};
// Geometry operations that do not need a plane
pub use crate::plane::{join_and_fill_points, join_points, scan_bounds, ScanBox};
// Values
pub use crate::point::{Axis, Point};
// Random shapes
pub use crate::rand::{
    draw_random_shape, CoordRange, ReplayToken as ShapeReplay, ShapeCfg, VertexCount,
};
