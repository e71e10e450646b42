//! PyO3 bindings for selected `fringe` functions.
//!
//! Notes
//! - Keep bindings thin and predictable; arguments and results are plain floats,
//!   ints and tuples. Frame composition and rendering stay in Rust.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

mod common;

use common::{check_wavelength, pair_from_py};

/// Ascending integer orders m with (m + offset − Δφ/2π)·λ in [d_min, d_max].
#[pyfunction]
fn mode_orders(d_min: f64, d_max: f64, lam: f64, delta_phi: f64, offset: f64) -> PyResult<Vec<i64>> {
    check_wavelength(lam)?;
    Ok(fringe::orders::mode_orders(d_min, d_max, lam, delta_phi, offset))
}

/// Crest radii (strictly positive, ≤ r_max) of one source.
#[pyfunction]
fn crest_radii(lam: f64, phi: f64, r_max: f64) -> PyResult<Vec<f64>> {
    check_wavelength(lam)?;
    Ok(fringe::wavefront::crest_radii(lam, phi, r_max))
}

/// Trough radii (strictly positive, ≤ r_max) of one source.
#[pyfunction]
fn trough_radii(lam: f64, phi: f64, r_max: f64) -> PyResult<Vec<f64>> {
    check_wavelength(lam)?;
    Ok(fringe::wavefront::trough_radii(lam, phi, r_max))
}

/// Per-order curve kind of the antinode family over [−d, d]:
/// `(order, constant, "hyperbola" | "half_line")`.
#[pyfunction]
#[pyo3(signature = (lam, d, phi1, phi2, half_size, tol_frac = 1e-3))]
fn antinode_kinds(
    lam: f64,
    d: f64,
    phi1: f64,
    phi2: f64,
    half_size: f64,
    tol_frac: f64,
) -> PyResult<Vec<(i64, f64, &'static str)>> {
    check_wavelength(lam)?;
    if !(d > 0.0) {
        return Err(PyValueError::new_err("separation must be > 0"));
    }
    let pair = pair_from_py(d, phi1, phi2);
    let delta_phi = pair.delta_phi();
    let orders = fringe::orders::Family::Antinode.orders((-d, d), lam, delta_phi);
    let curves = fringe::fringe::antinode_family(
        &orders,
        lam,
        delta_phi,
        &pair,
        (-half_size, half_size),
        fringe::style::Style::ANTINODE,
        tol_frac * lam,
    );
    Ok(curves
        .iter()
        .map(|c| {
            let kind = if c.is_half_line() { "half_line" } else { "hyperbola" };
            (c.order, c.constant, kind)
        })
        .collect())
}

#[pymodule]
fn fringe_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mode_orders, m)?)?;
    m.add_function(wrap_pyfunction!(crest_radii, m)?)?;
    m.add_function(wrap_pyfunction!(trough_radii, m)?)?;
    m.add_function(wrap_pyfunction!(antinode_kinds, m)?)?;
    Ok(())
}
