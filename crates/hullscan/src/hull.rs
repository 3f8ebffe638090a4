//! Hull values returned by the engines.
//!
//! - `Hull`: distinct vertices in counterclockwise order. Fewer than three
//!   vertices means a degenerate input (empty, one point, or a segment given
//!   by its two endpoints in lexicographic order).
//! - `EdgeHull`: the unordered accepted-edge set of the brute-force engine,
//!   with `stitch` to walk it into a `Hull`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{HullError, HullResult};
use crate::geom2::{
    distinct_points, lexicographic_cmp, orientation, segment_param, side, Edge, Point, Side,
};

/// Convex hull as a counterclockwise vertex cycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hull {
    vertices: Vec<Point>,
}

impl Hull {
    /// Wrap an engine's CCW output. Segments are stored min → max.
    pub(crate) fn from_ccw(mut vertices: Vec<Point>) -> Self {
        if vertices.len() == 2 && lexicographic_cmp(&vertices[0], &vertices[1]) == Ordering::Greater
        {
            vertices.swap(0, 1);
        }
        Self { vertices }
    }

    /// Hull of an input with at most two distinct points: the distinct points themselves.
    pub(crate) fn degenerate(points: &[Point]) -> Self {
        let distinct = distinct_points(points);
        debug_assert!(distinct.len() <= 2 || points.len() < 3);
        Self::from_ccw(distinct)
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// At least three vertices, i.e. a proper polygon.
    #[inline]
    pub fn is_polygon(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Boundary edges in CCW order. A segment hull has the single edge min → max.
    pub fn edges(&self) -> Vec<Edge> {
        match self.vertices.len() {
            0 | 1 => Vec::new(),
            2 => vec![Edge::new(self.vertices[0], self.vertices[1])],
            n => (0..n)
                .map(|k| Edge::new(self.vertices[k], self.vertices[(k + 1) % n]))
                .collect(),
        }
    }

    /// Signed area (positive for CCW polygons).
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let o = self.vertices[0];
        let mut twice = 0.0;
        for k in 1..n - 1 {
            twice += orientation(o, self.vertices[k], self.vertices[k + 1]);
        }
        0.5 * twice
    }

    /// `p` lies on or inside the hull (relative tolerance `eps`).
    pub fn contains(&self, p: Point, eps: f64) -> bool {
        match self.vertices.len() {
            0 => false,
            1 => p == self.vertices[0],
            2 => {
                let (a, b) = (self.vertices[0], self.vertices[1]);
                if side(a, b, p, eps) != Side::Collinear {
                    return false;
                }
                let t = segment_param(a, b, p);
                (-eps..=1.0 + eps).contains(&t)
            }
            _ => self.edges().iter().all(|e| side(e.a, e.b, p, eps) != Side::Right),
        }
    }

    /// Every consecutive vertex triple turns strictly left.
    pub fn is_strictly_convex(&self, eps: f64) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return true;
        }
        (0..n).all(|k| {
            let a = self.vertices[k];
            let b = self.vertices[(k + 1) % n];
            let c = self.vertices[(k + 2) % n];
            side(a, b, c, eps).is_left()
        })
    }

    /// Same cycle rotated to start at the lexicographically smallest vertex.
    ///
    /// Two engines agree on a hull iff their canonical forms are equal.
    pub fn canonical(&self) -> Hull {
        let mut vertices = self.vertices.clone();
        let start = (0..vertices.len())
            .min_by(|&i, &j| lexicographic_cmp(&vertices[i], &vertices[j]));
        if let Some(start) = start {
            vertices.rotate_left(start);
        }
        Hull { vertices }
    }
}

/// Accepted edges of the brute-force engine.
///
/// `points` is only populated for inputs with fewer than three distinct
/// points; `edges` is then empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeHull {
    points: Vec<Point>,
    edges: Vec<Edge>,
}

impl EdgeHull {
    pub(crate) fn degenerate(points: &[Point]) -> Self {
        Self {
            points: distinct_points(points),
            edges: Vec::new(),
        }
    }

    pub(crate) fn from_edges(edges: Vec<Edge>) -> Self {
        Self {
            points: Vec::new(),
            edges,
        }
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Value comparison against the accepted set (direction included).
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.edges.iter().any(|e| e == edge)
    }

    /// Walk the edge set into a CCW `Hull`, starting at the smallest vertex.
    pub fn stitch(&self) -> HullResult<Hull> {
        match self.edges.len() {
            0 => return Ok(Hull::from_ccw(self.points.clone())),
            1 => return Ok(Hull::from_ccw(vec![self.edges[0].a, self.edges[0].b])),
            _ => {}
        }
        let first = self
            .edges
            .iter()
            .min_by(|e, f| lexicographic_cmp(&e.a, &f.a))
            .copied()
            .ok_or(HullError::UnclosedBoundary {
                at: Point::zeros(),
            })?;
        let mut vertices = Vec::with_capacity(self.edges.len());
        vertices.push(first.a);
        let mut cur = first.b;
        while cur != first.a {
            if vertices.len() >= self.edges.len() {
                return Err(HullError::UnclosedBoundary { at: cur });
            }
            vertices.push(cur);
            let mut next = self.edges.iter().filter(|e| e.a == cur);
            cur = match (next.next(), next.next()) {
                (Some(e), None) => e.b,
                _ => return Err(HullError::UnclosedBoundary { at: cur }),
            };
        }
        if vertices.len() != self.edges.len() {
            return Err(HullError::UnclosedBoundary { at: cur });
        }
        Ok(Hull::from_ccw(vertices))
    }
}
