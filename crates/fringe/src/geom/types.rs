//! Sources, domain and grid.

use nalgebra::Vector2;

/// Coherent point source: position, amplitude (≥ 0) and initial phase (radians).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Source {
    pub pos: Vector2<f64>,
    pub amplitude: f64,
    pub phase: f64,
}

impl Source {
    #[inline]
    pub fn new(pos: Vector2<f64>, amplitude: f64, phase: f64) -> Self {
        Self {
            pos,
            amplitude,
            phase,
        }
    }
}

/// The two sources S1 = (−d/2, 0) and S2 = (+d/2, 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourcePair {
    pub s1: Source,
    pub s2: Source,
}

impl SourcePair {
    /// Place the sources symmetrically on the x-axis at separation `d`.
    pub fn symmetric(d: f64, (a1, phi1): (f64, f64), (a2, phi2): (f64, f64)) -> Self {
        Self {
            s1: Source::new(Vector2::new(-d / 2.0, 0.0), a1, phi1),
            s2: Source::new(Vector2::new(d / 2.0, 0.0), a2, phi2),
        }
    }
    /// Focal distance |S2 − S1|.
    #[inline]
    pub fn separation(&self) -> f64 {
        (self.s2.pos - self.s1.pos).norm()
    }
    /// Δφ = φ2 − φ1.
    #[inline]
    pub fn delta_phi(&self) -> f64 {
        self.s2.phase - self.s1.phase
    }
}

/// Axis-aligned square [−half, half]².
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub half: f64,
}

impl Domain {
    /// Domain of side length `size` centred at the origin.
    #[inline]
    pub fn with_size(size: f64) -> Self {
        Self { half: size / 2.0 }
    }
    #[inline]
    pub fn size(&self) -> f64 {
        2.0 * self.half
    }
    /// Horizontal clip window (left, right).
    #[inline]
    pub fn x_range(&self) -> (f64, f64) {
        (-self.half, self.half)
    }
    /// Distance from the centre to a corner, √2·L/2.
    #[inline]
    pub fn corner_radius(&self) -> f64 {
        std::f64::consts::SQRT_2 * self.half
    }
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x.abs() <= self.half && p.y.abs() <= self.half
    }
}

/// `n` equally spaced samples on [lo, hi], both ends included.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let last = (n - 1) as f64;
            (0..n).map(|i| lo + (hi - lo) * (i as f64) / last).collect()
        }
    }
}

/// N×N sampling of a `Domain`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    pub domain: Domain,
    pub n: usize,
    xs: Vec<f64>,
}

impl Grid {
    pub fn new(domain: Domain, n: usize) -> Self {
        let xs = linspace(-domain.half, domain.half, n);
        Self { domain, n, xs }
    }
    /// Column coordinates (x, ascending).
    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }
    /// Row coordinates (y, ascending). Same samples as `xs` on a square grid.
    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.xs
    }
    /// Node position for `(row, col)`.
    #[inline]
    pub fn node(&self, row: usize, col: usize) -> Vector2<f64> {
        Vector2::new(self.xs[col], self.xs[row])
    }
    /// Grid spacing (0 for a single-node grid).
    #[inline]
    pub fn step(&self) -> f64 {
        if self.n < 2 {
            0.0
        } else {
            self.domain.size() / (self.n - 1) as f64
        }
    }
}
