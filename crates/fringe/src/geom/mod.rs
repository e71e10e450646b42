//! Plane geometry for the two-source setup.
//!
//! Purpose
//! - Describe the sources, the square observation domain and its sampling grid.
//! - Evaluate distance fields and the path-difference field D = r2 − r1 on the grid.
//!
//! Conventions
//! - Fields are `DMatrix<f64>` indexed `(row, col) = (y index, x index)`, so row 0
//!   is the bottom edge (y = −L/2) and col 0 the left edge (x = −L/2).
//! - Grid axes follow `linspace` semantics: both end points are sampled.
//! - Invariant of the two-focus geometry: |D| ≤ d at every node.
//!
//! Code cross-refs: `crate::orders::mode_orders`, `crate::fringe::contour`

mod fields;
mod types;

pub use fields::{distance_field, path_difference_field};
pub use types::{linspace, Domain, Grid, Source, SourcePair};
