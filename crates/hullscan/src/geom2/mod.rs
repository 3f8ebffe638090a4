//! 2D geometry primitives shared by the hull engines.
//!
//! Purpose
//! - One orientation predicate with one sign convention (positive = left turn),
//!   plus the tolerance-aware `side` classification built on it.
//! - Input validation and deduplication used before any engine runs.
//!
//! Numerics
//! - Decisions go through `side(.., eps)` with `GeomCfg::eps_orient` (relative);
//!   near-collinear points resolve deterministically and never raise errors.
//!
//! Code cross-refs: `crate::brute`, `crate::quickhull`, `crate::graham`

mod predicates;
pub mod rand;
mod types;
mod util;

pub(crate) use predicates::segment_param;
pub use predicates::{distance_from_line, lexicographic_cmp, orientation, side};
pub use types::{Edge, GeomCfg, Point, Side};
pub(crate) use util::extreme_index;
pub use util::{distinct_points, validate_points};

#[cfg(test)]
mod tests;
