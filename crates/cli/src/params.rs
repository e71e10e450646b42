//! Parameter collection: JSON file (optional) layered under command-line flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use fringe::params::{Snapshot, SourceParams, Toggles};
use serde::{Deserialize, Serialize};

/// On-disk parameter snapshot. Missing fields take the interactive defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsFile {
    pub wavelength: f64,
    pub separation: f64,
    pub grid_size: f64,
    pub resolution: usize,
    pub amp1: f64,
    /// degrees
    pub phase1: f64,
    pub amp2: f64,
    /// degrees
    pub phase2: f64,
    pub attenuation: bool,
    pub phase_map: bool,
    pub nodal: bool,
    pub antinode: bool,
    pub wavefronts: bool,
}

impl Default for ParamsFile {
    fn default() -> Self {
        Snapshot::default().into()
    }
}

impl From<Snapshot> for ParamsFile {
    fn from(s: Snapshot) -> Self {
        Self {
            wavelength: s.wavelength,
            separation: s.separation,
            grid_size: s.grid_size,
            resolution: s.resolution,
            amp1: s.source1.amplitude,
            phase1: s.source1.phase_deg,
            amp2: s.source2.amplitude,
            phase2: s.source2.phase_deg,
            attenuation: s.toggles.attenuation,
            phase_map: s.toggles.phase_map,
            nodal: s.toggles.nodal,
            antinode: s.toggles.antinode,
            wavefronts: s.toggles.wavefronts,
        }
    }
}

impl From<&ParamsFile> for Snapshot {
    fn from(p: &ParamsFile) -> Self {
        Snapshot {
            wavelength: p.wavelength,
            separation: p.separation,
            grid_size: p.grid_size,
            resolution: p.resolution,
            source1: SourceParams {
                amplitude: p.amp1,
                phase_deg: p.phase1,
            },
            source2: SourceParams {
                amplitude: p.amp2,
                phase_deg: p.phase2,
            },
            toggles: Toggles {
                attenuation: p.attenuation,
                phase_map: p.phase_map,
                nodal: p.nodal,
                antinode: p.antinode,
                wavefronts: p.wavefronts,
            },
        }
    }
}

/// Scene parameters shared by every subcommand.
#[derive(Args, Clone, Debug, Default)]
pub struct SceneArgs {
    /// JSON parameter file; flags below override its fields
    #[arg(long)]
    pub params: Option<PathBuf>,
    /// Wavelength λ (m)
    #[arg(long)]
    pub wavelength: Option<f64>,
    /// Source separation d (m)
    #[arg(long)]
    pub separation: Option<f64>,
    /// Side length of the observation square (m)
    #[arg(long)]
    pub grid_size: Option<f64>,
    /// Samples per axis
    #[arg(long)]
    pub resolution: Option<usize>,
    #[arg(long)]
    pub amp1: Option<f64>,
    /// Initial phase of source 1 (degrees)
    #[arg(long)]
    pub phase1: Option<f64>,
    #[arg(long)]
    pub amp2: Option<f64>,
    /// Initial phase of source 2 (degrees)
    #[arg(long)]
    pub phase2: Option<f64>,
    /// Enable 1/r distance attenuation
    #[arg(long)]
    pub attenuation: bool,
    /// Show the wrapped phase map instead of intensity
    #[arg(long)]
    pub phase_map: bool,
    /// Overlay nodal (destructive) lines
    #[arg(long)]
    pub nodal: bool,
    /// Overlay antinode (constructive) lines
    #[arg(long)]
    pub antinode: bool,
    /// Overlay crest/trough wavefronts of both sources
    #[arg(long)]
    pub wavefronts: bool,
}

impl SceneArgs {
    /// Resolve file + flags into validated parameters.
    pub fn resolve(&self) -> Result<(ParamsFile, Snapshot)> {
        let mut p = match &self.params {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str::<ParamsFile>(&raw)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => ParamsFile::default(),
        };
        let set = |dst: &mut f64, v: Option<f64>| {
            if let Some(v) = v {
                *dst = v;
            }
        };
        set(&mut p.wavelength, self.wavelength);
        set(&mut p.separation, self.separation);
        set(&mut p.grid_size, self.grid_size);
        set(&mut p.amp1, self.amp1);
        set(&mut p.phase1, self.phase1);
        set(&mut p.amp2, self.amp2);
        set(&mut p.phase2, self.phase2);
        if let Some(n) = self.resolution {
            p.resolution = n;
        }
        p.attenuation |= self.attenuation;
        p.phase_map |= self.phase_map;
        p.nodal |= self.nodal;
        p.antinode |= self.antinode;
        p.wavefronts |= self.wavefronts;

        let snap = Snapshot::from(&p);
        snap.validate().context("invalid parameters")?;
        Ok((p, snap))
    }
}
