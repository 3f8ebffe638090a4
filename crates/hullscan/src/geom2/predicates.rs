//! Orientation, distance and ordering predicates.
//!
//! Every side test in the three engines goes through `orientation`; the sign
//! convention is fixed here once: positive means `c` is left of `a → b`.

use std::cmp::Ordering;

use super::types::{Point, Side};

/// Signed twice-area of the triangle `(a, b, c)`, i.e. the z-component of
/// `(b - a) × (c - a)`.
///
/// - `> 0`: `c` strictly left of `a → b` (counterclockwise turn)
/// - `< 0`: `c` strictly right (clockwise turn)
/// - `== 0`: collinear
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Euclidean distance from `c` to the line through `a` and `b`.
///
/// Falls back to the distance `|c - a|` when `a == b`.
#[inline]
pub fn distance_from_line(a: Point, b: Point, c: Point) -> f64 {
    let len = (b - a).norm();
    if len == 0.0 {
        return (c - a).norm();
    }
    orientation(a, b, c).abs() / len
}

/// Classify `c` against the directed line `a → b` with relative tolerance `eps`.
#[inline]
pub fn side(a: Point, b: Point, c: Point, eps: f64) -> Side {
    let o = orientation(a, b, c);
    let tol = eps * (b - a).norm() * (c - a).norm();
    if o > tol {
        Side::Left
    } else if o < -tol {
        Side::Right
    } else {
        Side::Collinear
    }
}

/// Total order on points: by `x`, then by `y`.
///
/// Signed zeros compare equal, matching `==` on points.
#[inline]
pub fn lexicographic_cmp(a: &Point, b: &Point) -> Ordering {
    coord_cmp(a.x, b.x).then(coord_cmp(a.y, b.y))
}

#[inline]
fn coord_cmp(a: f64, b: f64) -> Ordering {
    // -0.0 + 0.0 == +0.0
    (a + 0.0).total_cmp(&(b + 0.0))
}

/// Parameter of the projection of `c` onto `a → b` (0 at `a`, 1 at `b`).
#[inline]
pub(crate) fn segment_param(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    (c - a).dot(&ab) / ab.norm_squared()
}
