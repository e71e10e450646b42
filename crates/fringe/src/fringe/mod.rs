//! Fringe loci: constructive (antinode) and destructive (nodal) line families.
//!
//! Purpose
//! - Map each selected mode order to a renderable curve: either the implicit
//!   level set {D = c_m} (a hyperbola branch with foci S1, S2) or, when
//!   |c_m| = d within τ, the degenerate half-line on the axis beyond a focus.
//! - Provide the level-set extraction (`contour`) used to trace implicit curves.
//!
//! Why two generators
//! - `antinode_family` special-cases the degenerate conic: on the axis beyond a
//!   focus D is identically ±d, and zero-crossing extraction on a field that is
//!   flat along a segment produces unstable or missing output.
//! - `hyperbola_family` serves any offset without that special case. Nodal
//!   orders rarely land on |c_m| = d; when a caller supplies one anyway, the
//!   contour may show gaps. This limitation is kept as is.
//!
//! Code cross-refs: `crate::orders::{mode_orders, fringe_constant}`, `crate::geom`

mod antinode;
pub mod contour;
mod hyperbola;
mod types;

pub use antinode::antinode_family;
pub use hyperbola::hyperbola_family;
pub use types::{Curve, FringeCurve, Segment};

#[cfg(test)]
mod tests;
