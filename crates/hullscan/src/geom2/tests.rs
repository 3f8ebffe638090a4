use super::*;
use crate::error::HullError;
use nalgebra::vector;

#[test]
fn validate_reports_first_non_finite() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![1.0, f64::NAN],
        vector![f64::INFINITY, 0.0],
    ];
    match validate_points(&pts) {
        Err(HullError::NonFinite { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected NonFinite, got {other:?}"),
    }
    assert!(validate_points(&pts[..1]).is_ok());
    assert!(validate_points(&[]).is_ok());
}

#[test]
fn distinct_points_dedups_by_value() {
    let pts = vec![
        vector![1.0, 1.0],
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![-0.0, 0.0],
    ];
    let d = distinct_points(&pts);
    assert_eq!(d, vec![vector![0.0, 0.0], vector![1.0, 1.0]]);
}

#[test]
fn extreme_index_keeps_first_on_ties() {
    let pts = vec![vector![0.0, 1.0], vector![0.0, 1.0], vector![0.0, 0.5]];
    let i = extreme_index(&pts, |p, q| p.y > q.y).unwrap();
    assert_eq!(i, 0);
    assert!(extreme_index(&[], |p: &Point, q: &Point| p.x > q.x).is_none());
}

#[test]
fn edge_helpers() {
    let e = Edge::new(vector![0.0, 0.0], vector![3.0, 4.0]);
    assert!((e.length() - 5.0).abs() < 1e-12);
    assert_eq!(e.reversed().a, e.b);
    assert!(!e.is_degenerate());
    assert_eq!(Side::Left.opposite(), Side::Right);
    assert!(GeomCfg::default().eps_orient > 0.0);
    assert_eq!(GeomCfg::exact().eps_orient, 0.0);
}

#[test]
fn distinct_points_merges_separated_signed_zeros() {
    let pts = vec![vector![-0.0, 1.0], vector![0.0, 0.0], vector![0.0, 1.0]];
    let d = distinct_points(&pts);
    assert_eq!(d.len(), 2);
    assert_eq!(d[0], vector![0.0, 0.0]);
}
