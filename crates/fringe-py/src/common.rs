use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use fringe::geom::SourcePair;

/// λ must be finite and strictly positive before any core call.
pub fn check_wavelength(lam: f64) -> PyResult<()> {
    if !lam.is_finite() || lam <= 0.0 {
        return Err(PyValueError::new_err("wavelength must be finite and > 0"));
    }
    Ok(())
}

/// Unit-amplitude symmetric pair with the given phases (radians).
pub fn pair_from_py(d: f64, phi1: f64, phi2: f64) -> SourcePair {
    SourcePair::symmetric(d, (1.0, phi1), (1.0, phi2))
}
