//! Fixed scenarios every engine must agree on.

use hullscan::prelude::*;
use hullscan::Edge;
use nalgebra::vector;

fn all_hulls(points: &[Point]) -> Vec<(Algorithm, Hull)> {
    Algorithm::ALL
        .iter()
        .map(|&algo| {
            let hull = compute_hull(algo, points, GeomCfg::default(), &mut ())
                .unwrap_or_else(|e| panic!("{algo} failed: {e}"));
            (algo, hull)
        })
        .collect()
}

fn sorted(mut v: Vec<Point>) -> Vec<Point> {
    v.sort_by(hullscan::geom2::lexicographic_cmp);
    v
}

#[test]
fn empty_single_and_pair() {
    for (algo, hull) in all_hulls(&[]) {
        assert!(hull.is_empty(), "{algo}");
    }
    let one = vec![vector![2.0, -1.0]];
    for (algo, hull) in all_hulls(&one) {
        assert_eq!(hull.vertices(), one.as_slice(), "{algo}");
    }
    let two = vec![vector![3.0, 1.0], vector![-1.0, 0.0]];
    for (algo, hull) in all_hulls(&two) {
        assert_eq!(hull.vertices(), &[two[1], two[0]], "{algo}");
    }
}

#[test]
fn triangle_is_ccw() {
    let pts = vec![vector![0.0, 0.0], vector![0.0, 3.0], vector![3.0, 0.0]];
    for (algo, hull) in all_hulls(&pts) {
        assert_eq!(hull.len(), 3, "{algo}");
        assert!(hull.area() > 0.0, "{algo} not CCW");
    }
}

#[test]
fn collinear_keeps_endpoints() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![2.0, 0.0],
        vector![3.0, 0.0],
    ];
    for (algo, hull) in all_hulls(&pts) {
        assert_eq!(hull.vertices(), &[vector![0.0, 0.0], vector![3.0, 0.0]], "{algo}");
    }
}

#[test]
fn square_with_interior_point() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
        vector![2.0, 2.0],
    ];
    for (algo, hull) in all_hulls(&pts) {
        assert_eq!(hull.canonical().vertices(), &pts[..4], "{algo}");
        assert!((hull.area() - 16.0).abs() < 1e-12, "{algo}");
    }
}

#[test]
fn duplicates_do_not_repeat() {
    let pts = vec![
        vector![1.0, 1.0],
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![2.0, 0.0],
        vector![1.0, 2.0],
    ];
    let expected = sorted(vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 2.0]]);
    for (algo, hull) in all_hulls(&pts) {
        assert_eq!(sorted(hull.vertices().to_vec()), expected, "{algo}");
        assert!(hull.area() > 0.0, "{algo}");
    }
}

#[test]
fn brute_force_edges_match_polygon_edges() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
        vector![2.0, 2.0],
        vector![2.0, 0.0],
    ];
    let eh = brute_force(&pts, GeomCfg::default()).unwrap();
    let poly = quickhull(&pts, GeomCfg::default()).unwrap();
    let expected: Vec<Edge> = poly.edges();
    assert_eq!(eh.edges().len(), expected.len());
    for e in &expected {
        assert!(eh.contains_edge(e), "brute force lacks {e:?}");
    }
}

#[test]
fn demo_cloud_engines_agree() {
    // First rows of the sample cloud shipped with the CLI.
    let pts: Vec<Point> = [
        (120.6, 873.2),
        (487.5, 965.4),
        (936.3, 286.7),
        (824.1, 755.5),
        (642.9, 213.8),
        (951.7, 848.9),
        (211.2, 963.5),
        (563.7, 378.9),
        (295.4, 183.7),
        (704.8, 935.3),
        (345.9, 403.2),
        (951.8, 734.5),
        (839.6, 138.7),
        (447.3, 646.2),
        (732.1, 593.4),
        (117.9, 759.3),
        (165.7, 111.2),
        (997.1, 342.4),
        (745.2, 995.4),
        (193.2, 968.3),
    ]
    .iter()
    .map(|&(x, y)| vector![x, y])
    .collect();
    let hulls = all_hulls(&pts);
    let reference = hulls[0].1.canonical();
    for (algo, hull) in &hulls {
        assert_eq!(hull.canonical(), reference, "{algo} disagrees");
        for p in &pts {
            assert!(hull.contains(*p, 1e-9), "{algo} misses {p:?}");
        }
    }
}

#[test]
fn non_finite_input_is_rejected_everywhere() {
    let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, f64::INFINITY]];
    for algo in Algorithm::ALL {
        let err = compute_hull(algo, &pts, GeomCfg::default(), &mut ()).unwrap_err();
        assert_eq!(
            err,
            HullError::NonFinite {
                index: 2,
                x: 0.0,
                y: f64::INFINITY
            }
        );
    }
}

#[test]
fn parallel_top_edge_keeps_only_corners() {
    let pts = vec![
        vector![2.0, 2.0],
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![1.0, 2.0],
        vector![3.0, 2.0],
    ];
    let expected = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![3.0, 2.0],
        vector![1.0, 2.0],
    ];
    for (algo, hull) in all_hulls(&pts) {
        assert_eq!(hull.canonical().vertices(), expected.as_slice(), "{algo}");
        assert!(hull.is_strictly_convex(1e-9), "{algo}");
    }
}

#[test]
fn signed_zero_is_the_same_point() {
    let pts = vec![vector![-0.0, 1.0], vector![0.0, 0.0], vector![0.0, 1.0]];
    for (algo, hull) in all_hulls(&pts) {
        assert_eq!(hull.len(), 2, "{algo}");
        assert_eq!(hull.vertices()[0], vector![0.0, 0.0], "{algo}");
        assert_eq!(hull.vertices()[1], vector![0.0, 1.0], "{algo}");
    }
}
