//! Planar convex hulls by three engines that share one set of predicates.
//!
//! - `brute`: every pair of points is a candidate edge, O(n³).
//! - `quickhull`: divide and conquer around farthest points, O(n log n) expected.
//! - `graham`: angular sort and backtracking stack, O(n log n).
//!
//! Engines are pure, synchronous computations over a borrowed point slice.
//! Each has an `*_observed` variant that reports construction steps as
//! `events::HullEvent`s; rendering or tracing those is the caller's business.
//!
//! Conventions
//! - Orientation is positive for left (CCW) turns; hull vertices are CCW.
//! - Near-collinearity is decided by `GeomCfg::eps_orient` (relative).
//! - Non-finite coordinates are rejected with `HullError::NonFinite`.

pub mod algorithm;
pub mod brute;
pub mod error;
pub mod events;
pub mod geom2;
pub mod graham;
pub mod hull;
pub mod quickhull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use algorithm::{compute_hull, Algorithm};
pub use brute::{brute_force, brute_force_observed};
pub use error::{HullError, HullResult};
pub use events::{HullEvent, HullObserver, RejectReason};
pub use geom2::{Edge, GeomCfg, Point, Side};
pub use graham::{graham_scan, graham_scan_observed};
pub use hull::{EdgeHull, Hull};
pub use quickhull::{quickhull, quickhull_observed};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_cloud, CloudShape, ReplayToken};
    pub use crate::geom2::{distance_from_line, orientation, side};
    pub use crate::{
        brute_force, compute_hull, graham_scan, quickhull, Algorithm, EdgeHull, GeomCfg, Hull,
        HullError, HullEvent, HullObserver, Point,
    };
    pub use nalgebra::Vector2 as Vec2;
}
