use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fringe::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod params;
mod provenance;
mod render;

use params::SceneArgs;
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "fringe")]
#[command(about = "Two-source interference: fringe lines, wavefronts and field maps")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long, global = true)]
    label: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Render one frame: PNG field map plus an SVG with overlays
    Render {
        #[command(flatten)]
        scene: SceneArgs,
        /// SVG output path; the PNG is written next to it
        #[arg(long)]
        out: PathBuf,
    },
    /// Export the sampled field as a table (.csv or .parquet)
    Field {
        #[command(flatten)]
        scene: SceneArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print fringe orders, constants and curve kinds as JSON
    Orders {
        #[command(flatten)]
        scene: SceneArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Render { scene, out } => render(&scene, &out, cmd.label),
        Action::Field { scene, out } => field(&scene, &out, cmd.label),
        Action::Orders { scene } => orders(&scene),
        Action::Report => report(cmd.label),
    }
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn render(scene: &SceneArgs, out: &Path, label: Option<String>) -> Result<()> {
    let (file_params, snap) = scene.resolve()?;
    tracing::info!(out = %out.display(), label = ?label, "render");
    let frame = compose(&snap, &FringeCfg::default());
    ensure_parent(out)?;

    let png = out.with_extension("png");
    render::map_to_image(&frame)
        .save(&png)
        .with_context(|| format!("writing {}", png.display()))?;
    let href = png
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let svg = render::frame_to_svg(&frame, &href);
    std::fs::write(out, svg).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(
        antinodes = frame.antinodes.len(),
        nodals = frame.nodals.len(),
        wavefronts = frame.wavefronts.len(),
        "frame_written"
    );

    let mut payload = Payload::new(serde_json::to_value(&file_params)?);
    payload.label = label;
    payload.extra_outputs.push(png);
    write_sidecar(out, payload)?;
    Ok(())
}

fn field(scene: &SceneArgs, out: &Path, label: Option<String>) -> Result<()> {
    let (file_params, snap) = scene.resolve()?;
    tracing::info!(out = %out.display(), label = ?label, "field");
    let frame = compose(&snap, &FringeCfg::default());
    let mut df = export::field_table(&frame)?;
    let (min, max) = export::value_range(&df)?;
    tracing::info!(
        rows = df.height(),
        cols = df.width(),
        map = ?frame.map_kind,
        min = ?min,
        max = ?max,
        "field_table"
    );
    ensure_parent(out)?;
    export::write_table(&mut df, out)?;

    let mut payload = Payload::new(serde_json::to_value(&file_params)?);
    payload.label = label;
    write_sidecar(out, payload)?;
    Ok(())
}

fn curve_json(c: &FringeCurve) -> serde_json::Value {
    let geometry = match c.curve {
        Curve::GenericHyperbola { constant } => serde_json::json!({
            "kind": "hyperbola",
            "constant": constant,
        }),
        Curve::HalfLine { from, to } => serde_json::json!({
            "kind": "half_line",
            "from": [from.x, from.y],
            "to": [to.x, to.y],
        }),
    };
    serde_json::json!({
        "order": c.order,
        "constant": c.constant,
        "geometry": geometry,
    })
}

fn orders(scene: &SceneArgs) -> Result<()> {
    let (_, mut snap) = scene.resolve()?;
    // Orders do not depend on the field; keep the grid minimal.
    snap.resolution = 2;
    snap.toggles.antinode = true;
    snap.toggles.nodal = true;
    let frame = compose(&snap, &FringeCfg::default());
    let obj = serde_json::json!({
        "wavelength": snap.wavelength,
        "separation": snap.separation,
        "delta_phi": frame.sources.delta_phi(),
        "antinode": frame.antinodes.iter().map(curve_json).collect::<Vec<_>>(),
        "nodal": frame.nodals.iter().map(curve_json).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report(label: Option<String>) -> Result<()> {
    let mut obj = provenance::header(label.as_deref());
    obj["params"] = serde_json::to_value(params::ParamsFile::default())?;
    obj["outputs"] = serde_json::json!([]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
