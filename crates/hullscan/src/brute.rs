//! Brute-force hull: every point pair is a candidate edge.
//!
//! A pair `(i, j)` is a boundary edge iff all other points that are not
//! collinear with it lie on one side. Endpoints are excluded by position, so
//! duplicates of an endpoint stored elsewhere are classified like any other
//! point (they are collinear and inside the segment, hence harmless).
//!
//! Two refinements keep the accepted set equal to the edge set of the hull
//! polygon: zero-length pairs are skipped, and a pair with a collinear point
//! beyond one of its endpoints is rejected as a sub-segment of a longer edge.
//!
//! Cost: O(n³) side tests, O(h) extra memory. Pairs are enumerated by index,
//! never materialised.

use crate::error::HullResult;
use crate::events::{emit, HullEvent, HullObserver, RejectReason};
use crate::geom2::{
    distinct_points, lexicographic_cmp, segment_param, side, validate_points, Edge, GeomCfg,
    Point, Side,
};
use crate::hull::EdgeHull;

/// Brute-force hull without progress events.
pub fn brute_force(points: &[Point], cfg: GeomCfg) -> HullResult<EdgeHull> {
    brute_force_observed(points, cfg, &mut ())
}

/// Brute-force hull reporting every candidate pair to `obs`.
pub fn brute_force_observed<O>(points: &[Point], cfg: GeomCfg, obs: &mut O) -> HullResult<EdgeHull>
where
    O: HullObserver + ?Sized,
{
    validate_points(points)?;
    if points.len() < 3 || distinct_points(points).len() < 3 {
        return Ok(EdgeHull::degenerate(points));
    }

    let n = points.len();
    let mut edges: Vec<Edge> = Vec::new();
    let mut tested = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (points[i], points[j]);
            if a == b {
                emit(obs, || HullEvent::EdgeRejected {
                    a,
                    b,
                    reason: RejectReason::ZeroLength,
                });
                continue;
            }
            tested += 1;
            emit(obs, || HullEvent::CandidateEdge { a, b });
            match classify_pair(points, i, j, cfg.eps_orient, obs) {
                Ok(edge) => {
                    if !edges.contains(&edge) {
                        edges.push(edge);
                    }
                    emit(obs, || HullEvent::EdgeAccepted { edge });
                }
                Err(reason) => emit(obs, || HullEvent::EdgeRejected { a, b, reason }),
            }
        }
    }
    tracing::debug!(n, tested, edges = edges.len(), "brute_force");
    Ok(EdgeHull::from_edges(edges))
}

/// Classify all points except `i` and `j` against `points[i] → points[j]`.
///
/// Returns the CCW-oriented edge on acceptance. Stops at the first point that
/// settles a rejection.
fn classify_pair<O>(
    points: &[Point],
    i: usize,
    j: usize,
    eps: f64,
    obs: &mut O,
) -> Result<Edge, RejectReason>
where
    O: HullObserver + ?Sized,
{
    let (a, b) = (points[i], points[j]);
    let mut seen: Option<Side> = None;
    for (k, &p) in points.iter().enumerate() {
        if k == i || k == j {
            continue;
        }
        let s = side(a, b, p, eps);
        emit(obs, || HullEvent::PointClassified { point: p, side: s });
        match (s, seen) {
            (Side::Collinear, _) => {
                let t = segment_param(a, b, p);
                if !(0.0..=1.0).contains(&t) {
                    return Err(RejectReason::Subsumed);
                }
            }
            (s, None) => seen = Some(s),
            (s, Some(prev)) if s != prev => return Err(RejectReason::MixedSides),
            _ => {}
        }
    }
    Ok(match seen {
        Some(Side::Right) => Edge::new(b, a),
        Some(_) => Edge::new(a, b),
        // every other point is on the segment: orient min → max
        None if lexicographic_cmp(&a, &b).is_gt() => Edge::new(b, a),
        None => Edge::new(a, b),
    })
}
