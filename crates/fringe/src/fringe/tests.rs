use super::*;
use crate::geom::{path_difference_field, Domain, Grid, SourcePair};
use crate::orders::{mode_orders, Family};
use crate::style::Style;
use nalgebra::vector;
use std::f64::consts::PI;

fn pair(d: f64, phi1: f64, phi2: f64) -> SourcePair {
    SourcePair::symmetric(d, (1.0, phi1), (1.0, phi2))
}

#[test]
fn degenerate_plus_d_routes_to_left_half_line() {
    // λ=1, d=2, Δφ=0, m=2 → c = 2 = d
    let p = pair(2.0, 0.0, 0.0);
    let curves = antinode_family(&[2], 1.0, 0.0, &p, (-3.0, 3.0), Style::ANTINODE, 1e-3);
    assert_eq!(curves.len(), 1);
    match curves[0].curve {
        Curve::HalfLine { from, to } => {
            assert_eq!(from, vector![-3.0, 0.0]);
            assert_eq!(to, p.s1.pos);
        }
        Curve::GenericHyperbola { .. } => panic!("c = d must not go to contour extraction"),
    }
}

#[test]
fn degenerate_minus_d_routes_to_right_half_line() {
    let p = pair(2.0, 0.0, 0.0);
    let curves = antinode_family(&[-2], 1.0, 0.0, &p, (-3.0, 3.0), Style::ANTINODE, 1e-3);
    match curves[0].curve {
        Curve::HalfLine { from, to } => {
            assert_eq!(from, p.s2.pos);
            assert_eq!(to, vector![3.0, 0.0]);
        }
        Curve::GenericHyperbola { .. } => panic!("c = -d must not go to contour extraction"),
    }
}

#[test]
fn full_antinode_family_tags_only_the_ends() {
    let p = pair(2.0, 0.0, 0.0);
    let orders = Family::Antinode.orders((-2.0, 2.0), 1.0, 0.0);
    assert_eq!(orders, vec![-2, -1, 0, 1, 2]);
    let curves = antinode_family(&orders, 1.0, 0.0, &p, (-3.0, 3.0), Style::ANTINODE, 1e-3);
    let half: Vec<i64> = curves
        .iter()
        .filter(|c| c.is_half_line())
        .map(|c| c.order)
        .collect();
    assert_eq!(half, vec![-2, 2]);
    for c in &curves {
        assert_eq!(c.family, Family::Antinode);
        assert_eq!(c.style, Style::ANTINODE);
        if let Curve::GenericHyperbola { constant } = c.curve {
            assert!((constant - c.constant).abs() < 1e-15);
        }
    }
}

#[test]
fn tolerance_absorbs_phase_roundoff() {
    // Δφ = 2π·1e-4 shifts c by 1e-4·λ, well inside τ = 1e-3·λ.
    let p = pair(2.0, 0.0, 2.0 * PI * 1e-4);
    let curves = antinode_family(&[2], 1.0, p.delta_phi(), &p, (-3.0, 3.0), Style::ANTINODE, 1e-3);
    assert!(curves[0].is_half_line());
    // Outside the tolerance the generic branch is used.
    let q = pair(2.0, 0.0, 2.0 * PI * 1e-2);
    let generic = antinode_family(&[2], 1.0, q.delta_phi(), &q, (-3.0, 3.0), Style::ANTINODE, 1e-3);
    assert!(!generic[0].is_half_line());
}

#[test]
fn nodal_family_never_special_cases() {
    // offset 0.5 with Δφ = π makes c_m = m·λ, so m = ±2 hits |c| = d exactly.
    let orders = mode_orders(-2.0, 2.0, 1.0, PI, 0.5);
    let curves = hyperbola_family(&orders, 1.0, PI, Family::Nodal, Style::NODAL);
    assert_eq!(curves.len(), orders.len());
    assert!(curves.iter().all(|c| !c.is_half_line()));
    assert!(curves.iter().any(|c| (c.constant.abs() - 2.0).abs() < 1e-12));
}

#[test]
fn nodal_constants_for_in_phase_sources() {
    let orders = Family::Nodal.orders((-1.0, 1.0), 0.5, 0.0);
    let curves = hyperbola_family(&orders, 0.5, 0.0, Family::Nodal, Style::NODAL);
    let cs: Vec<f64> = curves.iter().map(|c| c.constant).collect();
    assert_eq!(cs, vec![-0.75, -0.25, 0.25, 0.75]);
}

#[test]
fn traced_hyperbola_stays_on_its_level() {
    let p = pair(1.0, 0.0, 0.0);
    let grid = Grid::new(Domain::with_size(6.0), 121);
    let diff = path_difference_field(&grid, &p);
    let curves = hyperbola_family(&[0], 0.5, 0.0, Family::Nodal, Style::NODAL);
    let segs = curves[0].trace(&grid, &diff);
    assert!(!segs.is_empty());
    for s in &segs {
        for q in [s.a, s.b] {
            let dq = (q - p.s2.pos).norm() - (q - p.s1.pos).norm();
            assert!((dq - 0.25).abs() < 2e-2, "point {:?} off level: {}", q, dq);
        }
    }
}

#[test]
fn central_antinode_traces_the_bisector() {
    let p = pair(1.0, 0.0, 0.0);
    let grid = Grid::new(Domain::with_size(4.0), 40);
    let diff = path_difference_field(&grid, &p);
    let curves = antinode_family(&[0], 0.5, 0.0, &p, grid.domain.x_range(), Style::ANTINODE, 5e-4);
    let segs = curves[0].trace(&grid, &diff);
    assert!(!segs.is_empty());
    assert!(segs.iter().all(|s| s.a.x.abs() < 1e-9 && s.b.x.abs() < 1e-9));
}

#[test]
fn half_line_traces_to_one_segment() {
    let p = pair(2.0, 0.0, 0.0);
    let grid = Grid::new(Domain::with_size(6.0), 7);
    let diff = path_difference_field(&grid, &p);
    let curves = antinode_family(&[2], 1.0, 0.0, &p, grid.domain.x_range(), Style::ANTINODE, 1e-3);
    let segs = curves[0].trace(&grid, &diff);
    assert_eq!(segs.len(), 1);
    assert!((segs[0].length() - 2.0).abs() < 1e-12);
}

#[test]
fn empty_orders_give_no_curves() {
    let p = pair(1.0, 0.0, 0.0);
    assert!(antinode_family(&[], 0.5, 0.0, &p, (-1.0, 1.0), Style::ANTINODE, 1e-3).is_empty());
    assert!(hyperbola_family(&[], 0.5, 0.0, Family::Nodal, Style::NODAL).is_empty());
}
