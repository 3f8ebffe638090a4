//! Basic 2D types and tolerances shared by the hull engines.
//!
//! - `Point`: a value-compared coordinate pair (`nalgebra::Vector2<f64>`).
//! - `Edge`: directed boundary segment; the hull interior lies on its left.
//! - `GeomCfg`: centralizes the orientation tolerance.
//! - `Side`: three-way result of an orientation test.
//!
//! Code cross-refs: `predicates::{orientation, side}`, `crate::hull::{Hull, EdgeHull}`

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A point in the plane. Compared by value everywhere.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// `eps_orient` is relative: an orientation `o(a, b, c)` counts as collinear when
/// `|o| <= eps_orient * |b - a| * |c - a|`, i.e. when the sine of the angle at `a`
/// is below `eps_orient`. Uniform scaling of the input does not change any decision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeomCfg {
    pub eps_orient: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_orient: 1e-9 }
    }
}

impl GeomCfg {
    /// Exact predicates: only a zero orientation is collinear.
    #[inline]
    pub fn exact() -> Self {
        Self { eps_orient: 0.0 }
    }
}

/// Position of a point relative to a directed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
    Collinear,
}

impl Side {
    #[inline]
    pub fn is_left(self) -> bool {
        matches!(self, Side::Left)
    }
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Collinear => Side::Collinear,
        }
    }
}

/// Directed boundary segment `a → b`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub a: Point,
    pub b: Point,
}

impl Edge {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self { a: self.b, b: self.a }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}
