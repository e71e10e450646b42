//! Curated internal API (UNSTABLE).
//!
//! Convenience surface for the CLI, bindings and experiments. Breaking changes
//! are allowed.

// Geometry
pub use crate::geom::{
    distance_field, linspace, path_difference_field, Domain, Grid, Source, SourcePair,
};
// Orders and fringe loci
pub use crate::fringe::contour::level_segments;
pub use crate::fringe::{antinode_family, hyperbola_family, Curve, FringeCurve, Segment};
pub use crate::orders::{fringe_constant, mode_orders, Family};
// Wavefronts
pub use crate::wavefront::{crest_radii, trough_radii, wavefronts, Circle, Front};
// Field and frame
pub use crate::field::{intensity, scalar_map, superpose, wrapped_phase, MapKind, WaveOpts};
pub use crate::frame::{compose, Frame};
pub use crate::params::{
    sample_snapshot, ParamError, ReplayToken, SliderRange, SliderRanges, Snapshot, SourceParams,
    Toggles, SLIDER_RANGES,
};
pub use crate::style::{Color, Dash, Style};
pub use crate::FringeCfg;
