//! Tolerance defaults for fringe geometry and field evaluation.
//!
//! Policy
//! - Defaults are fixed constants; `FringeCfg` carries them into call sites so
//!   tests and experiments can override one value without touching the rest.

/// Degenerate-locus tolerance as a fraction of the wavelength (τ = frac·λ).
pub(crate) const DEGENERATE_TOL_FRAC: f64 = 1e-3;
/// Softening added to r in the attenuated amplitude A/(r + ε).
pub(crate) const ATTEN_EPS: f64 = 1e-6;

/// Numeric configuration (tolerances) for one frame composition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FringeCfg {
    /// τ/λ used to route an antinode order to a half-line.
    pub degenerate_tol_frac: f64,
    /// ε in A/(r + ε) when attenuation is enabled.
    pub atten_eps: f64,
}

impl Default for FringeCfg {
    fn default() -> Self {
        Self {
            degenerate_tol_frac: DEGENERATE_TOL_FRAC,
            atten_eps: ATTEN_EPS,
        }
    }
}

impl FringeCfg {
    /// Absolute degeneracy tolerance τ for wavelength `lam`.
    #[inline]
    pub fn degenerate_tol(&self, lam: f64) -> f64 {
        self.degenerate_tol_frac * lam
    }
}
