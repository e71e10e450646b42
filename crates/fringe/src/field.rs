//! Superposed scalar field ψ = w1 + w2 and the maps derived from it.
//!
//! - Plain:      w_i = A_i · sin(k r_i + φ_i)
//! - Attenuated: w_i = A_i/(r_i + ε) · sin(k r_i + φ_i)
//!
//! with k = 2π/λ. The displayed map is either the intensity ψ² or the wrapped
//! phase arg(e^{iψ}) ∈ (−π, π].

use std::f64::consts::TAU;

use nalgebra::DMatrix;

use crate::geom::{distance_field, Grid, Source, SourcePair};

/// Which scalar map is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MapKind {
    #[default]
    Intensity,
    Phase,
}

/// Field evaluation options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveOpts {
    pub attenuation: bool,
    /// ε in A/(r + ε).
    pub atten_eps: f64,
}

fn source_wave(grid: &Grid, src: &Source, k: f64, opts: WaveOpts) -> DMatrix<f64> {
    let r = distance_field(grid, src.pos);
    r.map(|ri| {
        let amp = if opts.attenuation {
            src.amplitude / (ri + opts.atten_eps)
        } else {
            src.amplitude
        };
        amp * (k * ri + src.phase).sin()
    })
}

/// ψ(x, y) on the grid.
pub fn superpose(grid: &Grid, pair: &SourcePair, lam: f64, opts: WaveOpts) -> DMatrix<f64> {
    let k = TAU / lam;
    source_wave(grid, &pair.s1, k, opts) + source_wave(grid, &pair.s2, k, opts)
}

/// ψ² element-wise.
pub fn intensity(psi: &DMatrix<f64>) -> DMatrix<f64> {
    psi.map(|v| v * v)
}

/// arg(e^{iψ}) element-wise, in (−π, π].
pub fn wrapped_phase(psi: &DMatrix<f64>) -> DMatrix<f64> {
    psi.map(|v| v.sin().atan2(v.cos()))
}

/// The displayed map for `kind`.
pub fn scalar_map(psi: &DMatrix<f64>, kind: MapKind) -> DMatrix<f64> {
    match kind {
        MapKind::Intensity => intensity(psi),
        MapKind::Phase => wrapped_phase(psi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Domain;
    use std::f64::consts::PI;

    const PLAIN: WaveOpts = WaveOpts {
        attenuation: false,
        atten_eps: 1e-6,
    };

    #[test]
    fn origin_value_for_equidistant_point() {
        let grid = Grid::new(Domain::with_size(5.0), 3);
        let pair = SourcePair::symmetric(1.0, (1.0, 0.0), (1.0, 0.0));
        let psi = superpose(&grid, &pair, 0.5, PLAIN);
        // r1 = r2 = 0.5, k r = 2π
        let w = 1.0 * (TAU / 0.5 * 0.5 + 0.0).sin();
        assert_eq!(psi[(1, 1)], w + w);
        let i = intensity(&psi);
        assert_eq!(i[(1, 1)], (w + w) * (w + w));
        assert!(i[(1, 1)] < 1e-24);
    }

    #[test]
    fn attenuation_scales_by_inverse_distance() {
        let grid = Grid::new(Domain::with_size(4.0), 3);
        let pair = SourcePair::symmetric(2.0, (1.0, PI / 2.0), (0.0, 0.0));
        let opts = WaveOpts {
            attenuation: true,
            atten_eps: 1e-6,
        };
        let plain = superpose(&grid, &pair, 1.0, PLAIN);
        let att = superpose(&grid, &pair, 1.0, opts);
        // node (row 1, col 2) = (2, 0): r1 = 3
        assert!((att[(1, 2)] - plain[(1, 2)] / (3.0 + 1e-6)).abs() < 1e-12);
    }

    #[test]
    fn wrapped_phase_range() {
        let psi = DMatrix::from_row_slice(1, 4, &[0.0, PI, 3.0 * PI / 2.0, -7.0]);
        let ph = wrapped_phase(&psi);
        assert!(ph.iter().all(|v| *v > -PI - 1e-12 && *v <= PI + 1e-12));
        assert!((ph[(0, 2)] + PI / 2.0).abs() < 1e-12);
        assert!((ph[(0, 3)] - (-7.0 + TAU)).abs() < 1e-12);
    }

    #[test]
    fn scalar_map_dispatch() {
        let psi = DMatrix::from_element(2, 2, 0.5);
        assert_eq!(scalar_map(&psi, MapKind::Intensity)[(0, 0)], 0.25);
        assert_eq!(scalar_map(&psi, MapKind::Phase)[(1, 1)], 0.5_f64.sin().atan2(0.5_f64.cos()));
    }
}
