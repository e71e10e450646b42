//! Antinode family with degenerate half-line handling.

use nalgebra::Vector2;

use super::types::{Curve, FringeCurve};
use crate::geom::SourcePair;
use crate::orders::{fringe_constant, Family};
use crate::style::Style;

/// One curve per order for the constructive family (offset 0).
///
/// - `|c_m − d| ≤ tol` → half-line from the left clip edge to S1 (beyond S1, away from S2).
/// - `|c_m + d| ≤ tol` → half-line from S2 to the right clip edge.
/// - otherwise → level set D = c_m.
///
/// `x_range` is the horizontal clip window; `tol` is τ (typically 1e-3·λ).
pub fn antinode_family(
    orders: &[i64],
    lam: f64,
    delta_phi: f64,
    pair: &SourcePair,
    x_range: (f64, f64),
    style: Style,
    tol: f64,
) -> Vec<FringeCurve> {
    let d = pair.separation();
    let (x_left, x_right) = x_range;
    let (s1, s2) = (pair.s1.pos, pair.s2.pos);
    orders
        .iter()
        .map(|&m| {
            let c = fringe_constant(m, lam, delta_phi, Family::Antinode.offset());
            let curve = if (c - d).abs() <= tol {
                Curve::HalfLine {
                    from: Vector2::new(x_left, s1.y),
                    to: Vector2::new(s1.x, s1.y),
                }
            } else if (c + d).abs() <= tol {
                Curve::HalfLine {
                    from: Vector2::new(s2.x, s2.y),
                    to: Vector2::new(x_right, s2.y),
                }
            } else {
                Curve::GenericHyperbola { constant: c }
            };
            FringeCurve {
                family: Family::Antinode,
                order: m,
                constant: c,
                curve,
                style,
            }
        })
        .collect()
}
