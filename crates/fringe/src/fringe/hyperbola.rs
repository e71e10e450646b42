//! Generic hyperbola family (any offset, no degeneracy handling).

use super::types::{Curve, FringeCurve};
use crate::orders::{fringe_constant, Family};
use crate::style::Style;

/// One level-set curve per order with `c_m = (m + offset − Δφ/2π)·λ`.
///
/// Always emits `Curve::GenericHyperbola`, even where |c_m| = d.
pub fn hyperbola_family(
    orders: &[i64],
    lam: f64,
    delta_phi: f64,
    family: Family,
    style: Style,
) -> Vec<FringeCurve> {
    let offset = family.offset();
    orders
        .iter()
        .map(|&m| {
            let c = fringe_constant(m, lam, delta_phi, offset);
            FringeCurve {
                family,
                order: m,
                constant: c,
                curve: Curve::GenericHyperbola { constant: c },
                style,
            }
        })
        .collect()
}
