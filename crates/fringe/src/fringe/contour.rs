//! Level-set extraction by marching squares.
//!
//! Each grid cell is classified by which corners lie above the level; crossing
//! points are linearly interpolated along the cell edges. Saddle cells (four
//! crossings) are disambiguated with the average of the four corner values.
//! Cells with non-finite corners are skipped.

use nalgebra::{DMatrix, Vector2};

use super::types::Segment;
use crate::geom::Grid;

/// Segments of the level set {field = level}.
///
/// `field` must be `grid.n × grid.n` in the `(row = y, col = x)` layout.
pub fn level_segments(grid: &Grid, field: &DMatrix<f64>, level: f64) -> Vec<Segment> {
    let n = grid.n;
    debug_assert_eq!(field.shape(), (n, n), "field shape does not match grid");
    let mut out = Vec::new();
    if n < 2 {
        return out;
    }
    let xs = grid.xs();
    let ys = grid.ys();
    for i in 0..n - 1 {
        for j in 0..n - 1 {
            // corners: bottom-left, bottom-right, top-right, top-left
            let v = [
                field[(i, j)] - level,
                field[(i, j + 1)] - level,
                field[(i + 1, j + 1)] - level,
                field[(i + 1, j)] - level,
            ];
            if v.iter().any(|x| !x.is_finite()) {
                continue;
            }
            let p = [
                Vector2::new(xs[j], ys[i]),
                Vector2::new(xs[j + 1], ys[i]),
                Vector2::new(xs[j + 1], ys[i + 1]),
                Vector2::new(xs[j], ys[i + 1]),
            ];
            cell_segments(&v, &p, &mut out);
        }
    }
    out
}

/// Emit 0, 1 or 2 segments for one cell.
///
/// Edge `k` runs from corner `k` to corner `k+1 (mod 4)`: bottom, right, top, left.
fn cell_segments(v: &[f64; 4], p: &[Vector2<f64>; 4], out: &mut Vec<Segment>) {
    let above = v.map(|x| x > 0.0);
    let mut hits: [Option<Vector2<f64>>; 4] = [None; 4];
    let mut count = 0;
    for k in 0..4 {
        let l = (k + 1) % 4;
        if above[k] != above[l] {
            let t = v[k] / (v[k] - v[l]);
            hits[k] = Some(p[k] + (p[l] - p[k]) * t);
            count += 1;
        }
    }
    match count {
        2 => {
            let mut it = hits.iter().flatten();
            if let (Some(&a), Some(&b)) = (it.next(), it.next()) {
                out.push(Segment::new(a, b));
            }
        }
        4 => {
            let (Some(bottom), Some(right), Some(top), Some(left)) =
                (hits[0], hits[1], hits[2], hits[3])
            else {
                return;
            };
            let centre_above = v.iter().sum::<f64>() / 4.0 > 0.0;
            if above[0] != centre_above {
                // bottom-left and top-right corners are cut off
                out.push(Segment::new(bottom, left));
                out.push(Segment::new(right, top));
            } else {
                out.push(Segment::new(bottom, right));
                out.push(Segment::new(top, left));
            }
        }
        _ => {}
    }
}
