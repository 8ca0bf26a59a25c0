//! Polyline rasterization ("connect the dots").
//!
//! Model
//! - Each segment is walked in `round(|curr - prev|)` equal steps from `prev`,
//!   rounding the float cursor to the nearest pixel at every step. The final
//!   endpoint is not emitted; it starts the next segment.
//! - Vertical segments have no finite gradient, so the y step is set to ±1
//!   explicitly. Zero-length segments take zero steps.
//! - Rounding is `f64::round` (ties away from zero).
//! - Vertex differences wrap on `i64` overflow, like fixed-width integer
//!   subtraction; a segment across the whole `i64` range is therefore short.

use nalgebra::Vector2;

use crate::point::Point;
use crate::set::PointSet;

/// Every pixel on the straight segments between consecutive `vertices`.
///
/// Fewer than two vertices give an empty result. Output order is unspecified.
pub fn join_points(vertices: &[Point]) -> Vec<Point> {
    let mut out = PointSet::new();
    join_into(&mut out, vertices);
    out.to_vec()
}

/// Rasterize `vertices` into `out`.
pub(super) fn join_into(out: &mut PointSet, vertices: &[Point]) {
    for pair in vertices.windows(2) {
        join_segment(out, pair[0], pair[1]);
    }
}

fn join_segment(out: &mut PointSet, prev: Point, curr: Point) {
    let d = Vector2::new(
        curr.x.wrapping_sub(prev.x) as f64,
        curr.y.wrapping_sub(prev.y) as f64,
    );
    let steps = d.norm().round() as u64;
    if steps == 0 {
        return;
    }
    let gradient = if d.x == 0.0 { 0.0 } else { d.y / d.x };
    let x_inc = d.x / steps as f64;
    let mut inc = Vector2::new(x_inc, x_inc * gradient);
    if d.x == 0.0 {
        inc.y = d.y.signum();
    }
    let mut cursor = Vector2::new(prev.x as f64, prev.y as f64);
    // TODO: skip steps that round onto the previous pixel instead of re-inserting them.
    for _ in 0..steps {
        out.add(Point::new(cursor.x.round() as i64, cursor.y.round() as i64));
        cursor += inc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<Point>) -> Vec<Point> {
        v.sort();
        v
    }

    fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn fewer_than_two_vertices_is_empty() {
        assert!(join_points(&[]).is_empty());
        assert!(join_points(&[Point::new(4, 4)]).is_empty());
    }

    #[test]
    fn zero_length_segment_is_empty() {
        let a = Point::new(7, -3);
        assert!(join_points(&[a, a]).is_empty());
        assert!(join_points(&[a, a, a]).is_empty());
    }

    #[test]
    fn horizontal_line_excludes_endpoint() {
        let got = sorted(join_points(&pts(&[(0, 0), (5, 0)])));
        assert_eq!(got, pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]));
    }

    #[test]
    fn vertical_lines_both_directions() {
        let up = sorted(join_points(&pts(&[(0, 0), (0, 5)])));
        assert_eq!(up, pts(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]));
        let down = sorted(join_points(&pts(&[(2, 3), (2, 0)])));
        assert_eq!(down, pts(&[(2, 1), (2, 2), (2, 3)]));
    }

    #[test]
    fn diagonal_stays_on_the_diagonal() {
        let got = join_points(&pts(&[(0, 0), (10, 10)]));
        assert!(!got.is_empty());
        assert!(got.iter().all(|p| p.x == p.y));
        assert!(got.contains(&Point::new(0, 0)));
        assert!(got.iter().all(|p| (0..10).contains(&p.x)));
    }

    #[test]
    fn negative_direction_horizontal() {
        let got = sorted(join_points(&pts(&[(3, 1), (-1, 1)])));
        assert_eq!(got, pts(&[(0, 1), (1, 1), (2, 1), (3, 1)]));
    }

    #[test]
    fn polyline_shares_vertices_and_deduplicates() {
        // Out and back along the same row: every pixel appears once.
        let got = sorted(join_points(&pts(&[(0, 0), (3, 0), (0, 0)])));
        assert_eq!(got, pts(&[(0, 0), (1, 0), (2, 0), (3, 0)]));
    }

    #[test]
    fn closed_square_outline() {
        let got = join_points(&pts(&[(0, 0), (4, 0), (4, 4), (0, 4), (0, 0)]));
        // Perimeter of a 5x5 pixel square.
        assert_eq!(got.len(), 16);
        for p in &got {
            assert!(p.x == 0 || p.x == 4 || p.y == 0 || p.y == 4);
        }
    }

    #[test]
    fn negative_ties_round_away_from_zero() {
        // y cursor 0, -0.25, -0.5, -0.75: -0.5 rounds to -1, not 0.
        let got = sorted(join_points(&pts(&[(0, 0), (4, -1)])));
        assert_eq!(got, pts(&[(0, 0), (1, 0), (2, -1), (3, -1)]));
    }

    #[test]
    fn extreme_vertices_do_not_overflow() {
        // MAX - MIN wraps to -1: a single step from the first vertex.
        let got = join_points(&pts(&[(i64::MIN, 0), (i64::MAX, 0)]));
        assert_eq!(got, pts(&[(i64::MIN, 0)]));
        let got = join_points(&pts(&[(0, i64::MAX), (0, i64::MIN)]));
        assert_eq!(got, pts(&[(0, i64::MAX)]));
    }

    #[test]
    fn shallow_slope_uses_rounded_length() {
        // |(4, 1)| = 4.12 -> 4 steps of (1, 0.25).
        let got = sorted(join_points(&pts(&[(0, 0), (4, 1)])));
        assert_eq!(got, pts(&[(0, 0), (1, 0), (2, 1), (3, 1)]));
    }
}
