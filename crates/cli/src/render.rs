//! Raster + vector rendering of a composed frame.
//!
//! - The scalar map becomes a PNG: greyscale (min–max normalised) for
//!   intensity, a cyclic colour ramp for the wrapped phase.
//! - Fringe curves and wavefront circles become an SVG that references the PNG
//!   as its background. World coordinates are used directly (viewBox = domain),
//!   with the overlay group flipped so +y points up.

use std::fmt::Write as _;

use fringe::field::MapKind;
use fringe::frame::Frame;
use fringe::style::{Dash, Style};
use image::{Rgb, RgbImage};

/// Output size of the SVG canvas in pixels.
const CANVAS_PX: u32 = 720;

/// Anchors of the cyclic phase ramp (light → blue → dark → red → light).
const PHASE_RAMP: [[f64; 3]; 4] = [
    [226.0, 217.0, 226.0],
    [94.0, 128.0, 193.0],
    [47.0, 20.0, 55.0],
    [181.0, 81.0, 64.0],
];

fn cyclic_color(t: f64) -> Rgb<u8> {
    let k = PHASE_RAMP.len() as f64;
    let s = t.rem_euclid(1.0) * k;
    let i = (s.floor() as usize) % PHASE_RAMP.len();
    let j = (i + 1) % PHASE_RAMP.len();
    let u = s - s.floor();
    let px = |c: usize| (PHASE_RAMP[i][c] * (1.0 - u) + PHASE_RAMP[j][c] * u).round() as u8;
    Rgb([px(0), px(1), px(2)])
}

/// Scalar map as an image; row 0 of the field (y = −L/2) is the bottom pixel row.
pub fn map_to_image(frame: &Frame) -> RgbImage {
    let n = frame.grid.n;
    let map = &frame.map;
    let (lo, hi) = map
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = if hi > lo { hi - lo } else { 1.0 };
    let side = n as u32;
    RgbImage::from_fn(side, side, |px, py| {
        let row = n - 1 - py as usize;
        let v = map[(row, px as usize)];
        match frame.map_kind {
            MapKind::Intensity => {
                let g = (((v - lo) / span).clamp(0.0, 1.0) * 255.0).round() as u8;
                Rgb([g, g, g])
            }
            MapKind::Phase => {
                let t = (v + std::f64::consts::PI) / std::f64::consts::TAU;
                cyclic_color(t)
            }
        }
    })
}

fn stroke_attrs(style: &Style) -> String {
    let mut s = format!(
        r#"stroke="{}" stroke-width="{}" vector-effect="non-scaling-stroke""#,
        style.color.to_hex(),
        style.width
    );
    if style.dash == Dash::Dashed {
        s.push_str(r#" stroke-dasharray="4 3""#);
    }
    s
}

/// SVG document for `frame`, with `background` as the href of the raster map.
pub fn frame_to_svg(frame: &Frame, background: &str) -> String {
    let half = frame.grid.domain.half;
    let size = 2.0 * half;
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{px}" height="{px}" viewBox="{x0} {x0} {size} {size}">
<defs><clipPath id="domain"><rect x="{x0}" y="{x0}" width="{size}" height="{size}"/></clipPath></defs>
<image href="{background}" x="{x0}" y="{x0}" width="{size}" height="{size}" preserveAspectRatio="none"/>
<g transform="scale(1,-1)" fill="none" clip-path="url(#domain)">
"#,
        px = CANVAS_PX,
        x0 = -half,
        size = size,
        background = background,
    );

    for (curve, segs) in frame.traced_curves() {
        if segs.is_empty() {
            continue;
        }
        let mut d = String::new();
        for s in &segs {
            let _ = write!(
                d,
                "M{:.4} {:.4}L{:.4} {:.4}",
                s.a.x, s.a.y, s.b.x, s.b.y
            );
        }
        let _ = writeln!(
            svg,
            r#"  <path data-family="{:?}" data-order="{}" d="{}" {}/>"#,
            curve.family,
            curve.order,
            d,
            stroke_attrs(&curve.style)
        );
    }
    for c in &frame.wavefronts {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{:.4}" cy="{:.4}" r="{:.4}" {}/>"#,
            c.center.x,
            c.center.y,
            c.radius,
            stroke_attrs(&c.style)
        );
    }
    svg.push_str("</g>\n</svg>\n");
    svg
}
