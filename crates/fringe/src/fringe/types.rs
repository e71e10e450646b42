//! Curve variants produced by the fringe generators.

use nalgebra::{DMatrix, Vector2};

use super::contour::level_segments;
use crate::geom::Grid;
use crate::orders::Family;
use crate::style::Style;

/// Straight segment `a → b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
}

/// Geometry of one family member.
///
/// The renderer does not need to know why an order produced one or the other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    /// Implicit level set {D(x, y) = constant} of the path-difference field.
    GenericHyperbola { constant: f64 },
    /// Degenerate branch collapsed onto the inter-source axis.
    HalfLine { from: Vector2<f64>, to: Vector2<f64> },
}

/// One styled member of a fringe family.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FringeCurve {
    pub family: Family,
    pub order: i64,
    /// c_m for this order (kept for half-lines too).
    pub constant: f64,
    pub curve: Curve,
    pub style: Style,
}

impl FringeCurve {
    #[inline]
    pub fn is_half_line(&self) -> bool {
        matches!(self.curve, Curve::HalfLine { .. })
    }

    /// Segments to draw: the traced level set, or the half-line itself.
    pub fn trace(&self, grid: &Grid, path_diff: &DMatrix<f64>) -> Vec<Segment> {
        match self.curve {
            Curve::GenericHyperbola { constant } => level_segments(grid, path_diff, constant),
            Curve::HalfLine { from, to } => vec![Segment::new(from, to)],
        }
    }
}
