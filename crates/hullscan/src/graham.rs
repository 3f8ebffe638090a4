//! Graham scan: angular sort around a pivot, then a backtracking stack sweep.
//!
//! Invariant of the sweep: the stack is a strictly convex CCW chain from the
//! pivot to the last pushed point. A new point pops the top while the top two
//! entries and the new point fail to make a strict left turn.

use crate::error::HullResult;
use crate::events::{emit, HullEvent, HullObserver};
use crate::geom2::{extreme_index, side, validate_points, GeomCfg, Point, Side};
use crate::hull::Hull;

/// Graham scan without progress events.
pub fn graham_scan(points: &[Point], cfg: GeomCfg) -> HullResult<Hull> {
    graham_scan_observed(points, cfg, &mut ())
}

/// Graham scan reporting the pivot and every push/pop to `obs`.
pub fn graham_scan_observed<O>(points: &[Point], cfg: GeomCfg, obs: &mut O) -> HullResult<Hull>
where
    O: HullObserver + ?Sized,
{
    validate_points(points)?;
    if points.len() < 3 {
        return Ok(Hull::degenerate(points));
    }
    // Lowest point, leftmost among the lowest: nothing lies below it.
    let Some(pivot_idx) = extreme_index(points, |p, q| {
        p.y < q.y || (p.y == q.y && p.x < q.x)
    }) else {
        return Ok(Hull::degenerate(points));
    };
    let pivot = points[pivot_idx];
    emit(obs, || HullEvent::PivotSelected { pivot });

    let eps = cfg.eps_orient;
    let sorted = sort_by_polar_angle(pivot, points, eps);
    tracing::trace!(pivot = ?pivot, candidates = sorted.len(), "graham sorted");

    let mut stack: Vec<Point> = Vec::with_capacity(sorted.len() + 1);
    stack.push(pivot);
    emit(obs, || HullEvent::StackPush { point: pivot });
    let mut pops = 0usize;
    for p in sorted {
        while let &[.., second, top] = stack.as_slice() {
            if side(second, top, p, eps) == Side::Left {
                break;
            }
            stack.pop();
            pops += 1;
            emit(obs, || HullEvent::StackPop {
                popped: top,
                against: p,
            });
        }
        stack.push(p);
        emit(obs, || HullEvent::StackPush { point: p });
    }
    tracing::debug!(n = points.len(), pops, hull = stack.len(), "graham_scan");
    Ok(Hull::from_ccw(stack))
}

/// Points other than the pivot, ordered by polar angle around it (ascending),
/// ties by ascending distance.
///
/// Points on one ray through the pivot (collinear within `eps`) form one angle
/// class ordered by distance, even where `atan2` rounding disagrees. Exact
/// duplicates appear once.
fn sort_by_polar_angle(pivot: Point, points: &[Point], eps: f64) -> Vec<Point> {
    let mut keyed: Vec<(f64, f64, Point)> = points
        .iter()
        .filter(|&&p| p != pivot)
        .map(|&p| {
            let d = p - pivot;
            (d.y.atan2(d.x), d.norm_squared(), p)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let mut out: Vec<Point> = Vec::with_capacity(keyed.len());
    let mut start = 0;
    while start < keyed.len() {
        let anchor = keyed[start].2;
        let mut end = start + 1;
        while end < keyed.len() && on_same_ray(pivot, anchor, keyed[end].2, eps) {
            end += 1;
        }
        keyed[start..end].sort_by(|a, b| a.1.total_cmp(&b.1));
        for &(_, _, p) in &keyed[start..end] {
            if out.last() != Some(&p) {
                out.push(p);
            }
        }
        start = end;
    }
    out
}

#[inline]
fn on_same_ray(pivot: Point, anchor: Point, p: Point, eps: f64) -> bool {
    side(pivot, anchor, p, eps) == Side::Collinear
        && (anchor - pivot).dot(&(p - pivot)) > 0.0
}
