//! One full recomputation: parameter snapshot in, drawable primitives out.
//!
//! `compose` builds the grid, the path-difference field and the displayed
//! scalar map, then (per toggle) the antinode family, the nodal family and the
//! wavefronts of both sources. Orders are searched over [−d, d], which covers
//! every attainable path difference. Nothing is cached between calls.

use nalgebra::DMatrix;
use tracing::debug;

use crate::cfg::FringeCfg;
use crate::field::{scalar_map, superpose, MapKind, WaveOpts};
use crate::fringe::{antinode_family, hyperbola_family, FringeCurve, Segment};
use crate::geom::{path_difference_field, Grid, SourcePair};
use crate::orders::Family;
use crate::params::Snapshot;
use crate::style::Style;
use crate::wavefront::{wavefronts, Circle};

/// Everything the renderer needs for one snapshot.
#[derive(Clone, Debug)]
pub struct Frame {
    pub grid: Grid,
    pub sources: SourcePair,
    pub wavelength: f64,
    /// D = r2 − r1 on the grid.
    pub path_diff: DMatrix<f64>,
    pub map_kind: MapKind,
    /// Intensity ψ² or wrapped phase, per `map_kind`.
    pub map: DMatrix<f64>,
    pub antinodes: Vec<FringeCurve>,
    pub nodals: Vec<FringeCurve>,
    pub wavefronts: Vec<Circle>,
}

impl Frame {
    /// All fringe curves, antinodes first.
    pub fn curves(&self) -> impl Iterator<Item = &FringeCurve> {
        self.antinodes.iter().chain(self.nodals.iter())
    }

    /// Trace every fringe curve into segments, paired with its curve.
    pub fn traced_curves(&self) -> Vec<(&FringeCurve, Vec<Segment>)> {
        self.curves()
            .map(|c| (c, c.trace(&self.grid, &self.path_diff)))
            .collect()
    }
}

/// Compose a frame. `snap` is assumed valid (see `Snapshot::validate`).
pub fn compose(snap: &Snapshot, cfg: &FringeCfg) -> Frame {
    let grid = snap.grid();
    let sources = snap.sources();
    let lam = snap.wavelength;
    let d = sources.separation();
    let delta_phi = sources.delta_phi();

    let path_diff = path_difference_field(&grid, &sources);
    let psi = superpose(
        &grid,
        &sources,
        lam,
        WaveOpts {
            attenuation: snap.toggles.attenuation,
            atten_eps: cfg.atten_eps,
        },
    );
    let map_kind = snap.map_kind();
    let map = scalar_map(&psi, map_kind);

    let antinodes = if snap.toggles.antinode {
        let orders = Family::Antinode.orders((-d, d), lam, delta_phi);
        antinode_family(
            &orders,
            lam,
            delta_phi,
            &sources,
            grid.domain.x_range(),
            Style::ANTINODE,
            cfg.degenerate_tol(lam),
        )
    } else {
        Vec::new()
    };
    let nodals = if snap.toggles.nodal {
        let orders = Family::Nodal.orders((-d, d), lam, delta_phi);
        hyperbola_family(&orders, lam, delta_phi, Family::Nodal, Style::NODAL)
    } else {
        Vec::new()
    };
    let fronts = if snap.toggles.wavefronts {
        let r_max = grid.domain.corner_radius();
        let mut v = wavefronts(&sources.s1, lam, r_max, Style::CREST, Style::TROUGH);
        v.extend(wavefronts(&sources.s2, lam, r_max, Style::CREST, Style::TROUGH));
        v
    } else {
        Vec::new()
    };

    debug!(
        n = grid.n,
        lam,
        d,
        delta_phi,
        antinodes = antinodes.len(),
        half_lines = antinodes.iter().filter(|c| c.is_half_line()).count(),
        nodals = nodals.len(),
        wavefronts = fronts.len(),
        "frame composed"
    );

    Frame {
        grid,
        sources,
        wavelength: lam,
        path_diff,
        map_kind,
        map,
        antinodes,
        nodals,
        wavefronts: fronts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{sample_snapshot, ReplayToken, SourceParams, Toggles};
    use std::f64::consts::TAU;

    const ALL_ON: Toggles = Toggles {
        attenuation: false,
        phase_map: false,
        nodal: true,
        antinode: true,
        wavefronts: true,
    };

    #[test]
    fn origin_intensity_end_to_end() {
        let snap = Snapshot {
            wavelength: 0.5,
            separation: 1.0,
            grid_size: 5.0,
            resolution: 3,
            ..Snapshot::default()
        };
        let f = compose(&snap, &FringeCfg::default());
        assert_eq!(f.map.shape(), (3, 3));
        let w = (TAU / 0.5 * 0.5).sin();
        assert_eq!(f.map[(1, 1)], (w + w) * (w + w));
        assert!(f.map[(1, 1)] < 1e-24);
        assert_eq!(f.path_diff[(1, 1)], 0.0);
    }

    #[test]
    fn intensity_is_mirror_symmetric_for_identical_sources() {
        let snap = Snapshot {
            wavelength: 0.37,
            separation: 1.3,
            grid_size: 4.0,
            resolution: 41,
            source1: SourceParams {
                amplitude: 1.2,
                phase_deg: 45.0,
            },
            source2: SourceParams {
                amplitude: 1.2,
                phase_deg: 45.0,
            },
            toggles: Toggles {
                attenuation: true,
                ..Toggles::default()
            },
        };
        let f = compose(&snap, &FringeCfg::default());
        let n = f.grid.n;
        for row in 0..n {
            for col in 0..n {
                let a = f.map[(row, col)];
                let b = f.map[(row, n - 1 - col)];
                assert!((a - b).abs() < 1e-9 * (1.0 + a.abs()), "row {row} col {col}");
            }
        }
    }

    #[test]
    fn toggles_gate_overlays() {
        let off = compose(
            &Snapshot {
                resolution: 16,
                ..Snapshot::default()
            },
            &FringeCfg::default(),
        );
        assert!(off.antinodes.is_empty() && off.nodals.is_empty() && off.wavefronts.is_empty());

        let on = compose(
            &Snapshot {
                resolution: 16,
                toggles: ALL_ON,
                ..Snapshot::default()
            },
            &FringeCfg::default(),
        );
        // λ=0.5, d=1: antinodes m ∈ [-2, 2] with both ends degenerate, nodes m ∈ [-2, 1]
        assert_eq!(on.antinodes.len(), 5);
        assert_eq!(on.antinodes.iter().filter(|c| c.is_half_line()).count(), 2);
        assert_eq!(on.nodals.len(), 4);
        // r_max = 3√2 ≈ 4.243: 8 crests and 8 troughs per source
        assert_eq!(on.wavefronts.len(), 32);
        assert_eq!(on.curves().count(), 9);
    }

    #[test]
    fn phase_map_is_wrapped() {
        let snap = Snapshot {
            resolution: 24,
            toggles: Toggles {
                phase_map: true,
                ..Toggles::default()
            },
            ..Snapshot::default()
        };
        let f = compose(&snap, &FringeCfg::default());
        assert_eq!(f.map_kind, MapKind::Phase);
        let pi = std::f64::consts::PI;
        assert!(f.map.iter().all(|v| *v > -pi - 1e-12 && *v <= pi + 1e-12));
    }

    #[test]
    fn curve_constants_within_separation() {
        let cfg = FringeCfg::default();
        for index in 0..20 {
            let snap = sample_snapshot(ReplayToken { seed: 5, index }, 8, ALL_ON);
            let f = compose(&snap, &cfg);
            let d = f.sources.separation();
            let tau = cfg.degenerate_tol(snap.wavelength);
            for c in f.curves() {
                assert!(c.constant.abs() <= d + tau, "{:?}", c);
            }
        }
    }

    #[test]
    fn identical_snapshots_give_identical_frames() {
        let snap = sample_snapshot(ReplayToken { seed: 1, index: 1 }, 32, ALL_ON);
        let a = compose(&snap, &FringeCfg::default());
        let b = compose(&snap, &FringeCfg::default());
        assert_eq!(a.map, b.map);
        assert_eq!(a.antinodes, b.antinodes);
        assert_eq!(a.nodals, b.nodals);
        assert_eq!(a.wavefronts, b.wavefronts);
    }

    #[test]
    fn traced_curves_cover_each_overlay() {
        let snap = Snapshot {
            resolution: 64,
            toggles: ALL_ON,
            ..Snapshot::default()
        };
        let f = compose(&snap, &FringeCfg::default());
        let traced = f.traced_curves();
        assert_eq!(traced.len(), 9);
        assert!(traced.iter().all(|(_, segs)| !segs.is_empty()));
    }
}
