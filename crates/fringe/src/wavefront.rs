//! Wavefront circles (crests and troughs) around a single source.
//!
//! Crest radii `r = (n − φ/2π)·λ`, trough radii `r = (n + ½ − φ/2π)·λ`, with
//! index ranges tight to `[0, r_max]`. Only strictly positive radii are emitted.

use std::f64::consts::TAU;

use nalgebra::Vector2;

use crate::geom::Source;
use crate::style::Style;

/// Crest or trough.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Front {
    Crest,
    Trough,
}

impl Front {
    #[inline]
    fn offset(self) -> f64 {
        match self {
            Front::Crest => 0.0,
            Front::Trough => 0.5,
        }
    }
}

/// Styled circle centred on a source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
    pub front: Front,
    pub style: Style,
}

/// Radii of one front kind: indices `⌈shift − off⌉ ..= ⌊r_max/λ + shift − off⌋`.
fn front_radii(lam: f64, phi: f64, r_max: f64, front: Front) -> Vec<f64> {
    let shift = phi / TAU;
    let off = front.offset();
    let n_min = (shift - off).ceil() as i64;
    let n_max = (r_max / lam + shift - off).floor() as i64;
    (n_min..=n_max)
        .map(|n| (n as f64 + off - shift) * lam)
        .filter(|&r| r > 0.0)
        .collect()
}

/// Crest radii in ascending order.
pub fn crest_radii(lam: f64, phi: f64, r_max: f64) -> Vec<f64> {
    front_radii(lam, phi, r_max, Front::Crest)
}

/// Trough radii in ascending order.
pub fn trough_radii(lam: f64, phi: f64, r_max: f64) -> Vec<f64> {
    front_radii(lam, phi, r_max, Front::Trough)
}

/// Concentric crest and trough circles for `source` (crests first).
pub fn wavefronts(
    source: &Source,
    lam: f64,
    r_max: f64,
    crest: Style,
    trough: Style,
) -> Vec<Circle> {
    let make = |front: Front, style: Style| {
        move |radius: f64| Circle {
            center: source.pos,
            radius,
            front,
            style,
        }
    };
    crest_radii(lam, source.phase, r_max)
        .into_iter()
        .map(make(Front::Crest, crest))
        .chain(
            trough_radii(lam, source.phase, r_max)
                .into_iter()
                .map(make(Front::Trough, trough)),
        )
        .collect()
}
