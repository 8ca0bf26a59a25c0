//! Integer point-set geometry: rasterized outlines, interior fill, axis flips.
//!
//! Layout
//! - `point`: the `Point` value type and the `Axis` selector.
//! - `set`: `PointSet` (deduplicating container) and the lock-backed `SyncPointSet`.
//! - `plane`: `Plane`, a fixed-size coordinate space with join/fill/flip operations.
//! - `rand`: reproducible random vertex sequences for demos and benches.
//!
//! API Policy
//! - The core is pure computation over in-memory sequences. It never logs, and
//!   never touches colour, pixel buffers or files; that belongs to callers.
//! - Snapshots returned by `PointSet::to_vec` and `Plane::read_points` are
//!   unordered. Callers that need a stable order sort them.

pub mod api;
mod cfg;
pub mod plane;
pub mod point;
pub mod rand;
pub mod set;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use plane::{join_and_fill_points, join_points, scan_bounds, Plane, PlaneError, ScanBox};
pub use point::{Axis, Point};
pub use set::{PointSet, SyncPointSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::plane::{join_and_fill_points, join_points, Plane, PlaneError};
    pub use crate::point::{Axis, Point};
    pub use crate::rand::{draw_random_shape, ReplayToken, ShapeCfg, VertexCount};
    pub use crate::set::PointSet;
}
