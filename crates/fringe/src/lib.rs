//! Two-source interference: fringe geometry, wavefronts and field maps.
//!
//! Data flow
//! - `params::Snapshot` → `geom` (grid, distance and path-difference fields)
//!   → `orders` (mode orders in range) → `fringe` (hyperbolas / half-lines).
//! - `geom` + parameters → `wavefront` (crest/trough circles).
//! - `field` evaluates the superposed wave for the background map.
//! - `frame::compose` runs one full recomputation and returns drawable primitives.
//!
//! API Policy
//! - Project-internal crate; no stable public API. Prefer `api` or `prelude`
//!   re-exports in callers.

pub mod api;
mod cfg;
pub mod field;
pub mod frame;
pub mod fringe;
pub mod geom;
pub mod orders;
pub mod params;
pub mod style;
pub mod wavefront;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::FringeCfg;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::FringeCfg;
    pub use crate::frame::{compose, Frame};
    pub use crate::fringe::{Curve, FringeCurve, Segment};
    pub use crate::orders::{mode_orders, Family};
    pub use crate::params::{Snapshot, SourceParams, Toggles};
    pub use crate::style::{Color, Dash, Style};
    pub use crate::wavefront::{Circle, Front};
    pub use nalgebra::Vector2 as Vec2;
}
