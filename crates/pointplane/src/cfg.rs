//! Fixed constants for the fill heuristic (internal).
//!
//! Policy
//! - Defaults are fixed constants, like the rounding rule. If one ever needs
//!   tuning it should become a parameter of the operation that uses it rather
//!   than a global knob.

/// Units added on every side of the vertex bounding box before scanning columns.
pub(crate) const FILL_MARGIN: i64 = 1;
