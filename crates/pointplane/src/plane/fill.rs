//! Scanline fill over a rasterized outline.
//!
//! Model
//! - Scan every column of the vertex bounding box (grown by `FILL_MARGIN`) from
//!   bottom to top. A hit is the last pixel of each vertical run of outline
//!   pixels, so a boundary that is several pixels thick in a column counts as
//!   one crossing.
//! - An odd hit count means a crossing was lost to that collapse; the last hit
//!   is dropped and the remaining hits are joined pairwise.
//!
//! Limitations
//! - This is ray casting on pixels, not point-in-polygon mathematics. Concave
//!   or self-intersecting shapes may fill wrongly; the outline is always kept.

use crate::cfg::FILL_MARGIN;
use crate::point::Point;
use crate::set::PointSet;

use super::join::join_into;

/// Inclusive column/row range scanned by the fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanBox {
    pub min: Point,
    pub max: Point,
}

impl ScanBox {
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }
}

/// Bounding box of `vertices` grown by one unit on every side; `None` for no vertices.
///
/// The box is not clamped to the plane, so it starts at -1 when a vertex sits on 0.
/// At the ends of the `i64` range the margin saturates.
pub fn scan_bounds(vertices: &[Point]) -> Option<ScanBox> {
    let (first, rest) = vertices.split_first()?;
    let (lo, hi) = rest.iter().fold((*first, *first), |(lo, hi), p| {
        (
            Point::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    });
    Some(ScanBox {
        min: Point::new(
            lo.x.saturating_sub(FILL_MARGIN),
            lo.y.saturating_sub(FILL_MARGIN),
        ),
        max: Point::new(
            hi.x.saturating_add(FILL_MARGIN),
            hi.y.saturating_add(FILL_MARGIN),
        ),
    })
}

/// Outline of `vertices` plus a best-effort interior fill. Output order is unspecified.
pub fn join_and_fill_points(vertices: &[Point]) -> Vec<Point> {
    let Some(bounds) = scan_bounds(vertices) else {
        return Vec::new();
    };
    let mut outline = PointSet::new();
    join_into(&mut outline, vertices);

    let mut out = outline.clone();
    let mut hits: Vec<i64> = Vec::new();
    for x in bounds.min.x..=bounds.max.x {
        hits.clear();
        for y in bounds.min.y..=bounds.max.y {
            // Nothing lies above i64::MAX, so a pixel there always ends its run.
            let run_continues = y
                .checked_add(1)
                .is_some_and(|above| outline.contains(Point::new(x, above)));
            if outline.contains(Point::new(x, y)) && !run_continues {
                hits.push(y);
            }
        }
        if hits.len() % 2 == 1 {
            hits.pop();
        }
        for pair in hits.chunks_exact(2) {
            join_into(&mut out, &[Point::new(x, pair[0]), Point::new(x, pair[1])]);
        }
    }
    out.to_vec()
}
