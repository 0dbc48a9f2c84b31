use mazer_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Consecutive cells of any valid solution path are at distance 1.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
