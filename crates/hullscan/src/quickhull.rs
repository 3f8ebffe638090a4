//! Quickhull: divide and conquer around the farthest point.
//!
//! `find_hull(S, A, B)` takes the points strictly left of `A → B`. An empty set
//! confirms `B` as a hull vertex; otherwise the farthest point `P` splits `S`
//! into the parts left of `A → P` and left of `P → B`, and whatever lies in the
//! triangle `A, P, B` is dropped for good.
//!
//! The recursion runs on an explicit LIFO worklist, so adversarial inputs
//! (O(n) depth) cannot exhaust the call stack; tasks are popped in the same
//! order the recursive calls would run.
//!
//! Starting from `P1 = min`, `find_hull(upper, P1, P2)` then
//! `find_hull(lower, P2, P1)` traverses the hull clockwise and ends on `P1`
//! again; the engine drops the repeated `P1` and reverses the tail to return
//! a CCW cycle that starts at `P1`.

use std::cmp::Ordering;

use crate::error::HullResult;
use crate::events::{emit, HullEvent, HullObserver};
use crate::geom2::{
    distance_from_line, extreme_index, lexicographic_cmp, side, validate_points, Edge, GeomCfg,
    Point, Side,
};
use crate::hull::Hull;

/// Quickhull without progress events.
pub fn quickhull(points: &[Point], cfg: GeomCfg) -> HullResult<Hull> {
    quickhull_observed(points, cfg, &mut ())
}

/// Quickhull reporting partitions, farthest points and confirmed edges to `obs`.
pub fn quickhull_observed<O>(points: &[Point], cfg: GeomCfg, obs: &mut O) -> HullResult<Hull>
where
    O: HullObserver + ?Sized,
{
    validate_points(points)?;
    if points.len() < 3 {
        return Ok(Hull::degenerate(points));
    }
    let (p1, p2) = match (
        extreme_index(points, |p, q| lexicographic_cmp(p, q) == Ordering::Less),
        extreme_index(points, |p, q| lexicographic_cmp(p, q) == Ordering::Greater),
    ) {
        (Some(lo), Some(hi)) if points[lo] != points[hi] => (points[lo], points[hi]),
        _ => return Ok(Hull::degenerate(points)),
    };

    let eps = cfg.eps_orient;
    let upper: Vec<Point> = points
        .iter()
        .copied()
        .filter(|&p| side(p1, p2, p, eps) == Side::Left)
        .collect();
    let lower: Vec<Point> = points
        .iter()
        .copied()
        .filter(|&p| side(p2, p1, p, eps) == Side::Left)
        .collect();
    emit(obs, || HullEvent::Partition {
        a: p1,
        b: p2,
        upper: upper.len(),
        lower: lower.len(),
    });

    let mut runner = QuickhullRunner {
        eps,
        obs,
        out: vec![p1],
        tasks_run: 0,
    };
    runner.find_hull(upper, p1, p2);
    runner.find_hull(lower, p2, p1);
    let QuickhullRunner {
        mut out, tasks_run, ..
    } = runner;

    // `out` = [P1, .., P2, .., P1], clockwise.
    out.pop();
    out[1..].reverse();
    tracing::debug!(n = points.len(), tasks_run, hull = out.len(), "quickhull");
    Ok(Hull::from_ccw(out))
}

struct Task {
    set: Vec<Point>,
    a: Point,
    b: Point,
}

/// Worklist runner carrying the tolerance, observer and output accumulator.
struct QuickhullRunner<'o, O: ?Sized> {
    eps: f64,
    obs: &'o mut O,
    out: Vec<Point>,
    tasks_run: usize,
}

impl<O> QuickhullRunner<'_, O>
where
    O: HullObserver + ?Sized,
{
    fn find_hull(&mut self, set: Vec<Point>, a: Point, b: Point) {
        let mut tasks = vec![Task { set, a, b }];
        while let Some(Task { set, a, b }) = tasks.pop() {
            self.tasks_run += 1;
            emit(&mut *self.obs, || HullEvent::CandidateEdge { a, b });
            let Some(pmax) = farthest(&set, a, b, self.eps) else {
                // Nothing beyond a → b: it is a boundary edge (interior on the other side).
                emit(&mut *self.obs, || HullEvent::EdgeAccepted {
                    edge: Edge::new(b, a),
                });
                self.out.push(b);
                continue;
            };
            emit(&mut *self.obs, || HullEvent::FarthestPoint { a, b, point: pmax });
            tracing::trace!(remaining = set.len(), "quickhull split");

            let mut left_of_ap = Vec::new();
            let mut left_of_pb = Vec::new();
            for &p in &set {
                if side(a, pmax, p, self.eps) == Side::Left {
                    left_of_ap.push(p);
                } else if side(pmax, b, p, self.eps) == Side::Left {
                    left_of_pb.push(p);
                } else if p != pmax {
                    emit(&mut *self.obs, || HullEvent::PointDiscarded { point: p });
                }
            }
            // LIFO: (A, P) runs before (P, B).
            tasks.push(Task {
                set: left_of_pb,
                a: pmax,
                b,
            });
            tasks.push(Task {
                set: left_of_ap,
                a,
                b: pmax,
            });
        }
    }
}

/// Point of `set` farthest from the line `a → b`.
///
/// Points on the parallel through the farthest one (within `eps`) tie with it;
/// the one furthest along `a → b` wins, so the rest end up inside a later
/// triangle instead of on the hull.
fn farthest(set: &[Point], a: Point, b: Point, eps: f64) -> Option<Point> {
    let mut best: Option<(Point, f64)> = None;
    for &p in set {
        let d = distance_from_line(a, b, p);
        if best.is_none_or(|(_, bd)| d > bd) {
            best = Some((p, d));
        }
    }
    let (far, _) = best?;
    let dir = b - a;
    let extreme = set
        .iter()
        .copied()
        .filter(|&p| side(far, far + dir, p, eps) == Side::Collinear)
        .fold(far, |acc, p| if p.dot(&dir) > acc.dot(&dir) { p } else { acc });
    Some(extreme)
}
