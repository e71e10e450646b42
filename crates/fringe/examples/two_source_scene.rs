//! Two in-phase sources with every overlay enabled.
//!
//! Purpose
//! - Print what one frame contains (orders, constants, curve kinds, circle
//!   counts) for the default scene, as a quick sanity check of the engine.
//!
//! Run: cargo run -p fringe --example two_source_scene

use fringe::prelude::*;

fn main() {
    let snap = Snapshot {
        resolution: 200,
        toggles: Toggles {
            attenuation: false,
            phase_map: false,
            nodal: true,
            antinode: true,
            wavefronts: true,
        },
        ..Snapshot::default()
    };
    if let Err(e) = snap.validate() {
        eprintln!("invalid snapshot: {e}");
        std::process::exit(2);
    }
    let frame = compose(&snap, &FringeCfg::default());

    println!(
        "lambda={} d={} L={} N={}",
        snap.wavelength, snap.separation, snap.grid_size, snap.resolution
    );
    for (curve, segs) in frame.traced_curves() {
        let kind = match curve.curve {
            Curve::GenericHyperbola { .. } => "hyperbola",
            Curve::HalfLine { .. } => "half-line",
        };
        println!(
            "{:?} m={:+} c={:+.4} kind={} segments={}",
            curve.family,
            curve.order,
            curve.constant,
            kind,
            segs.len()
        );
    }
    let crests = frame
        .wavefronts
        .iter()
        .filter(|c| c.front == Front::Crest)
        .count();
    println!(
        "wavefronts: {} crests, {} troughs",
        crests,
        frame.wavefronts.len() - crests
    );
}
