//! Immutable parameter snapshot (one per recomputation) and its validation.
//!
//! Purpose
//! - Replace interactive slider state with a plain value passed into `frame::compose`.
//! - Validate the domain constraints the core relies on (λ > 0, d > 0, L > 0,
//!   N ≥ 2, A ≥ 0, all finite). Core functions do not re-check them.
//! - Draw reproducible random snapshots inside the interactive ranges for
//!   benchmarks and determinism checks.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::field::MapKind;
use crate::geom::{Domain, Grid, SourcePair};

/// Amplitude and initial phase (degrees) of one source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceParams {
    pub amplitude: f64,
    pub phase_deg: f64,
}

impl Default for SourceParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            phase_deg: 0.0,
        }
    }
}

impl SourceParams {
    #[inline]
    pub fn phase_rad(&self) -> f64 {
        self.phase_deg.to_radians()
    }
}

/// Display toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Toggles {
    /// Use A/(r + ε) instead of constant amplitude.
    pub attenuation: bool,
    /// Show the wrapped phase map instead of intensity.
    pub phase_map: bool,
    pub nodal: bool,
    pub antinode: bool,
    pub wavefronts: bool,
}

/// All inputs of one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    /// λ (m).
    pub wavelength: f64,
    /// d (m).
    pub separation: f64,
    /// L, side length of the observation square (m).
    pub grid_size: f64,
    /// N, samples per axis.
    pub resolution: usize,
    pub source1: SourceParams,
    pub source2: SourceParams,
    pub toggles: Toggles,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            wavelength: 0.5,
            separation: 1.0,
            grid_size: 6.0,
            resolution: 500,
            source1: SourceParams::default(),
            source2: SourceParams::default(),
            toggles: Toggles::default(),
        }
    }
}

impl Snapshot {
    pub fn sources(&self) -> SourcePair {
        SourcePair::symmetric(
            self.separation,
            (self.source1.amplitude, self.source1.phase_rad()),
            (self.source2.amplitude, self.source2.phase_rad()),
        )
    }
    #[inline]
    pub fn domain(&self) -> Domain {
        Domain::with_size(self.grid_size)
    }
    pub fn grid(&self) -> Grid {
        Grid::new(self.domain(), self.resolution)
    }
    #[inline]
    pub fn map_kind(&self) -> MapKind {
        if self.toggles.phase_map {
            MapKind::Phase
        } else {
            MapKind::Intensity
        }
    }

    /// Check the constraints the core assumes.
    pub fn validate(&self) -> Result<(), ParamError> {
        positive("wavelength", self.wavelength)?;
        positive("separation", self.separation)?;
        positive("grid_size", self.grid_size)?;
        if self.resolution < 2 {
            return Err(ParamError::Resolution(self.resolution));
        }
        for (name, s) in [("source1", &self.source1), ("source2", &self.source2)] {
            if !s.amplitude.is_finite() || s.amplitude < 0.0 {
                return Err(ParamError::Amplitude {
                    source: name,
                    value: s.amplitude,
                });
            }
            if !s.phase_deg.is_finite() {
                return Err(ParamError::NotFinite {
                    name,
                    value: s.phase_deg,
                });
            }
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ParamError> {
    if !value.is_finite() {
        return Err(ParamError::NotFinite { name, value });
    }
    if value <= 0.0 {
        return Err(ParamError::NotPositive { name, value });
    }
    Ok(())
}

/// Rejected snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    /// λ, d or L is zero or negative.
    NotPositive { name: &'static str, value: f64 },
    /// A parameter is NaN or infinite.
    NotFinite { name: &'static str, value: f64 },
    /// Fewer than two samples per axis.
    Resolution(usize),
    /// Negative amplitude.
    Amplitude { source: &'static str, value: f64 },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::NotPositive { name, value } => {
                write!(f, "{} must be > 0 (got {})", name, value)
            }
            ParamError::NotFinite { name, value } => {
                write!(f, "{} must be finite (got {})", name, value)
            }
            ParamError::Resolution(n) => write!(f, "resolution must be >= 2 (got {})", n),
            ParamError::Amplitude { source, value } => {
                write!(f, "{} amplitude must be >= 0 (got {})", source, value)
            }
        }
    }
}

impl std::error::Error for ParamError {}

/// Closed interval with a step, as offered by the interactive controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }
    /// Snap `u ∈ [0, 1]` to the nearest step inside the range.
    fn snap(&self, u: f64) -> f64 {
        let steps = ((self.max - self.min) / self.step).round();
        let k = (u.clamp(0.0, 1.0) * steps).round();
        (self.min + k * self.step).min(self.max)
    }
}

/// Interactive ranges of every numeric parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRanges {
    pub wavelength: SliderRange,
    pub separation: SliderRange,
    pub grid_size: SliderRange,
    pub resolution: SliderRange,
    pub amplitude: SliderRange,
    pub phase_deg: SliderRange,
}

pub const SLIDER_RANGES: SliderRanges = SliderRanges {
    wavelength: SliderRange::new(0.01, 2.0, 0.01),
    separation: SliderRange::new(0.1, 5.0, 0.1),
    grid_size: SliderRange::new(2.0, 12.0, 0.5),
    resolution: SliderRange::new(200.0, 1200.0, 50.0),
    amplitude: SliderRange::new(0.0, 2.0, 0.1),
    phase_deg: SliderRange::new(0.0, 360.0, 5.0),
};

/// Replay token to make random snapshots reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Random snapshot on the slider lattice, with the given resolution and toggles.
pub fn sample_snapshot(tok: ReplayToken, resolution: usize, toggles: Toggles) -> Snapshot {
    let mut rng = tok.to_std_rng();
    let r = SLIDER_RANGES;
    let source = |rng: &mut StdRng| SourceParams {
        amplitude: r.amplitude.snap(rng.gen()),
        phase_deg: r.phase_deg.snap(rng.gen()),
    };
    let wavelength = r.wavelength.snap(rng.gen());
    let separation = r.separation.snap(rng.gen());
    let grid_size = r.grid_size.snap(rng.gen());
    let source1 = source(&mut rng);
    let source2 = source(&mut rng);
    Snapshot {
        wavelength,
        separation,
        grid_size,
        resolution,
        source1,
        source2,
        toggles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid_and_matches_controls() {
        let s = Snapshot::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.map_kind(), MapKind::Intensity);
        let pair = s.sources();
        assert!((pair.separation() - 1.0).abs() < 1e-12);
        assert_eq!(s.domain().x_range(), (-3.0, 3.0));
    }

    #[test]
    fn degrees_become_radians() {
        let s = Snapshot {
            source2: SourceParams {
                amplitude: 1.0,
                phase_deg: 180.0,
            },
            ..Snapshot::default()
        };
        assert!((s.sources().delta_phi() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn validation_rejects_bad_inputs() {
        let bad_lam = Snapshot {
            wavelength: 0.0,
            ..Snapshot::default()
        };
        assert!(matches!(
            bad_lam.validate(),
            Err(ParamError::NotPositive {
                name: "wavelength",
                ..
            })
        ));
        let bad_n = Snapshot {
            resolution: 1,
            ..Snapshot::default()
        };
        assert_eq!(bad_n.validate(), Err(ParamError::Resolution(1)));
        let bad_amp = Snapshot {
            source2: SourceParams {
                amplitude: -0.1,
                phase_deg: 0.0,
            },
            ..Snapshot::default()
        };
        let err = bad_amp.validate().unwrap_err();
        assert_eq!(err.to_string(), "source2 amplitude must be >= 0 (got -0.1)");
        let nan_d = Snapshot {
            separation: f64::NAN,
            ..Snapshot::default()
        };
        assert!(matches!(nan_d.validate(), Err(ParamError::NotFinite { .. })));
    }

    #[test]
    fn sampled_snapshots_are_reproducible_and_valid() {
        let tok = ReplayToken { seed: 42, index: 3 };
        let a = sample_snapshot(tok, 64, Toggles::default());
        let b = sample_snapshot(tok, 64, Toggles::default());
        assert_eq!(a, b);
        for index in 0..50 {
            let s = sample_snapshot(ReplayToken { seed: 9, index }, 32, Toggles::default());
            assert!(s.wavelength >= 0.01 && s.wavelength <= 2.0);
            assert!(s.separation >= 0.1 - 1e-12 && s.separation <= 5.0);
            assert!(s.grid_size >= 2.0 && s.grid_size <= 12.0);
            assert!(s.validate().is_ok(), "{:?}", s);
        }
    }

    #[test]
    fn snap_hits_endpoints() {
        let r = SLIDER_RANGES.phase_deg;
        assert_eq!(r.snap(0.0), 0.0);
        assert_eq!(r.snap(1.0), 360.0);
        assert_eq!(r.snap(0.5), 180.0);
    }
}
