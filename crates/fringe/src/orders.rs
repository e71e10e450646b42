//! Mode-range selection for fringe families.
//!
//! A family member of order `m` is the locus D = c_m with
//! `c_m = (m + offset − Δφ/2π)·λ`; offset 0 gives antinodes, 0.5 gives nodes.
//! Because |D| ≤ d on the whole plane, the search range [−d, d] is always
//! sufficient; narrower ranges (e.g. the attained min/max of a sampled field)
//! are accepted too.

use std::f64::consts::TAU;

/// Fringe family: constructive (antinode) or destructive (nodal) lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Antinode,
    Nodal,
}

impl Family {
    /// Offset added to the order in `c_m`.
    #[inline]
    pub fn offset(self) -> f64 {
        match self {
            Family::Antinode => 0.0,
            Family::Nodal => 0.5,
        }
    }
    /// All orders of this family whose constant lies in `[d_min, d_max]`.
    pub fn orders(self, (d_min, d_max): (f64, f64), lam: f64, delta_phi: f64) -> Vec<i64> {
        mode_orders(d_min, d_max, lam, delta_phi, self.offset())
    }
}

/// Path-difference constant `c_m = (m + offset − Δφ/2π)·λ`.
#[inline]
pub fn fringe_constant(m: i64, lam: f64, delta_phi: f64, offset: f64) -> f64 {
    (m as f64 + offset - delta_phi / TAU) * lam
}

/// Ascending list of every integer `m` with `c_m ∈ [d_min, d_max]` (closed).
///
/// `m_lo = ⌈d_min/λ − offset + shift⌉`, `m_hi = ⌊d_max/λ − offset + shift⌋` with
/// `shift = Δφ/2π`; empty when `m_hi < m_lo`. Requires λ > 0 (not checked).
pub fn mode_orders(d_min: f64, d_max: f64, lam: f64, delta_phi: f64, offset: f64) -> Vec<i64> {
    let shift = delta_phi / TAU;
    let lower = (d_min / lam - offset + shift).ceil() as i64;
    let upper = (d_max / lam - offset + shift).floor() as i64;
    if upper < lower {
        return Vec::new();
    }
    (lower..=upper).collect()
}
