//! Distance and path-difference fields sampled on a `Grid`.

use nalgebra::{DMatrix, Vector2};

use super::types::{Grid, SourcePair};

/// r(x, y) = |(x, y) − p| at every node.
pub fn distance_field(grid: &Grid, p: Vector2<f64>) -> DMatrix<f64> {
    let xs = grid.xs();
    let ys = grid.ys();
    DMatrix::from_fn(grid.n, grid.n, |row, col| {
        (xs[col] - p.x).hypot(ys[row] - p.y)
    })
}

/// D(x, y) = r2 − r1 (distance to S2 minus distance to S1).
///
/// Positive on the S1 side of the perpendicular bisector, |D| ≤ d everywhere.
pub fn path_difference_field(grid: &Grid, pair: &SourcePair) -> DMatrix<f64> {
    let r1 = distance_field(grid, pair.s1.pos);
    let r2 = distance_field(grid, pair.s2.pos);
    r2 - r1
}
