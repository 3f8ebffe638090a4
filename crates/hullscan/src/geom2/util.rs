use super::predicates::lexicographic_cmp;
use super::types::Point;
use crate::error::{HullError, HullResult};

/// Reject the first point with a NaN or infinite coordinate.
pub fn validate_points(points: &[Point]) -> HullResult<()> {
    match points
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some((index, p)) => Err(HullError::NonFinite {
            index,
            x: p.x,
            y: p.y,
        }),
        None => Ok(()),
    }
}

/// Value-deduplicated copy of `points`, sorted lexicographically.
pub fn distinct_points(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_by(lexicographic_cmp);
    pts.dedup_by(|a, b| a == b);
    pts
}

/// Index of the extreme point: `better(p, q)` means `p` beats the incumbent `q`.
/// The first one wins on ties.
pub(crate) fn extreme_index<F>(points: &[Point], mut better: F) -> Option<usize>
where
    F: FnMut(&Point, &Point) -> bool,
{
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        match best {
            Some(b) if !better(p, &points[b]) => {}
            _ => best = Some(i),
        }
    }
    best
}
