use super::*;
use crate::geom2::rand::{draw_convex_ring, draw_points, draw_ring_radial, RadialCfg, ReplayToken, VertexCount};
use crate::geom2::{convex_hull, ClosedRing, CyclicRing, Extent};
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn unit_square() -> CyclicRing {
    CyclicRing::new(vec![
        vector![0.0, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 0.0],
    ])
    .unwrap()
}

fn diamond() -> CyclicRing {
    CyclicRing::new(vec![
        vector![0.0, -1.0],
        vector![-1.0, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 0.0],
    ])
    .unwrap()
}

/// Counterclockwise U with a notch between x=1 and x=2 above y=1.
fn u_shape() -> CyclicRing {
    CyclicRing::new(vec![
        vector![0.0, 0.0],
        vector![3.0, 0.0],
        vector![3.0, 3.0],
        vector![2.0, 3.0],
        vector![2.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 3.0],
        vector![0.0, 3.0],
    ])
    .unwrap()
}

#[test]
fn unit_square_known_points() {
    let cyc = unit_square();
    let closed = cyc.to_closed();
    let inner = vector![0.5, 0.5];
    let far = vector![2.0, 2.0];
    let left = vector![0.0, 0.5];

    assert_eq!(crossing_number_test(&[inner], &closed, true), vec![inner]);
    assert_eq!(crossing_number_test(&[inner], &closed, false), vec![inner]);
    assert_eq!(winding_number_test(&[inner], &cyc), vec![inner]);

    assert!(crossing_number_test(&[far], &closed, true).is_empty());
    assert!(winding_number_test(&[far], &cyc).is_empty());

    assert_eq!(crossing_number_test(&[left], &closed, true), vec![left]);
    assert!(crossing_number_test(&[left], &closed, false).is_empty());
}

#[test]
fn raw_counts_keep_reference_tie_breaks() {
    let closed = unit_square().to_closed();
    // Left edge point: the lower-vertex rule and the right edge both fire.
    assert_eq!(crossing_number(vector![0.0, 0.5], &closed, true), 2);
    assert_eq!(crossing_number(vector![0.0, 0.5], &closed, false), 1);
    // Right edge point: only the `x == xs[i]` rule sees it.
    assert_eq!(crossing_number(vector![1.0, 0.5], &closed, true), 1);
    assert_eq!(crossing_number(vector![1.0, 0.5], &closed, false), 0);
    // Clockwise ring winds negatively.
    assert_eq!(winding_number(vector![0.5, 0.5], &unit_square()), -1);
    assert_eq!(winding_number(vector![0.5, 0.5], &unit_square().reversed()), 1);
}

#[test]
fn boundary_flag_on_every_side_of_the_square() {
    let cyc = unit_square();
    let closed = cyc.to_closed();
    let on_edges = [
        vector![0.0, 0.5],
        vector![1.0, 0.5],
        vector![0.5, 0.0],
        vector![0.5, 1.0],
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
        vector![1.0, 0.0],
    ];
    assert_eq!(crossing_number_test(&on_edges, &closed, true), on_edges.to_vec());
    assert!(crossing_number_test(&on_edges, &closed, false).is_empty());
    assert!(winding_number_test(&on_edges, &cyc).is_empty());
}

#[test]
fn strict_guards_drop_vertex_height_rays() {
    // y = 0 passes through the left and right vertices of the diamond.
    let cyc = diamond();
    let closed = cyc.to_closed();
    let p = vector![0.5, 0.0];
    assert!(crossing_contains(p, &closed, true));
    assert!(!crossing_contains(p, &closed, false));
    assert_eq!(crossing_number(p, &closed, false), 0);
    assert!(winding_contains(p, &cyc));
}

#[test]
fn exterior_points_level_with_a_vertex_stay_outside() {
    let cyc = CyclicRing::new(vec![
        vector![4.0, 0.0],
        vector![0.0, 4.0],
        vector![-4.0, 0.0],
    ])
    .unwrap();
    let closed = cyc.to_closed();
    // (4, 2) is on the vertical through (4, 0); (-2, 4) is level with the apex.
    let right = vector![4.0, 2.0];
    let apex_level = vector![-2.0, 4.0];
    let inner = vector![0.0, 2.0];
    assert_eq!(crossing_number(right, &closed, true), 1);
    assert_eq!(crossing_number(apex_level, &closed, true), 1);

    let pts = [right, apex_level, inner];
    assert_eq!(crossing_number_indices(&pts, &closed, true), vec![2]);
    assert_eq!(crossing_number_indices(&pts, &closed, false), vec![2]);
    assert_eq!(winding_number_indices(&pts, &cyc), vec![2]);
}

#[test]
fn triangle_with_hypotenuse_point() {
    let closed = ClosedRing::new(vec![
        vector![0.0, 0.0],
        vector![0.0, 4.0],
        vector![6.0, 0.0],
        vector![0.0, 0.0],
    ])
    .unwrap();
    let cyc = closed.to_cyclic();
    let pts = [vector![1.0, 1.0], vector![3.0, 3.0], vector![3.0, 2.0]];
    assert_eq!(crossing_number_indices(&pts, &closed, true), vec![0, 2]);
    assert_eq!(crossing_number_indices(&pts, &closed, false), vec![0]);
    assert_eq!(winding_number_indices(&pts, &cyc), vec![0]);
}

#[test]
fn concave_notch_is_outside() {
    let cyc = u_shape();
    let closed = cyc.to_closed();
    let pts = [
        vector![0.5, 2.0],
        vector![1.5, 2.0],
        vector![2.5, 2.0],
        vector![1.5, 0.5],
        vector![1.5, 3.5],
    ];
    let expected = vec![0, 2, 3];
    assert_eq!(crossing_number_indices(&pts, &closed, true), expected);
    assert_eq!(crossing_number_indices(&pts, &closed, false), expected);
    assert_eq!(winding_number_indices(&pts, &cyc), expected);
    // The notch point sits inside the extent; only the exact test rejects it.
    assert_eq!(extent_filter(&pts, closed.vertices()).len(), 4);
}

#[test]
fn explicit_closing_vertex_is_harmless_for_winding() {
    let cyc = u_shape();
    let carried = CyclicRing::new(cyc.to_closed().vertices().to_vec()).unwrap();
    let pts = draw_points(
        Extent::of(cyc.vertices()).unwrap(),
        300,
        0.5,
        ReplayToken { seed: 5, index: 0 },
    );
    assert_eq!(
        winding_number_test(&pts, &cyc),
        winding_number_test(&pts, &carried)
    );
}

#[test]
fn empty_point_set() {
    let cyc = unit_square();
    let closed = cyc.to_closed();
    assert!(crossing_number_test(&[], &closed, true).is_empty());
    assert!(crossing_number_test(&[], &closed, false).is_empty());
    assert!(winding_number_test(&[], &cyc).is_empty());
}

#[test]
fn duplicates_are_evaluated_independently() {
    let closed = unit_square().to_closed();
    let p = vector![0.25, 0.75];
    let q = vector![5.0, 0.75];
    let pts = [p, q, p, p];
    assert_eq!(crossing_number_indices(&pts, &closed, true), vec![0, 2, 3]);
}

fn star_cfg() -> RadialCfg {
    RadialCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 40 },
        ..RadialCfg::default()
    }
}

fn is_subsequence(out: &[Vector2<f64>], idx: &[usize], points: &[Vector2<f64>]) -> bool {
    idx.windows(2).all(|w| w[0] < w[1])
        && idx.len() == out.len()
        && idx.iter().zip(out).all(|(&i, p)| points[i] == *p)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn outputs_are_idempotent_subsequences(seed in any::<u64>(), n in 0usize..80, include in any::<bool>()) {
        let cyc = draw_ring_radial(star_cfg(), ReplayToken { seed, index: 0 }).unwrap();
        let closed = cyc.to_closed();
        let pts = draw_points(Extent::of(cyc.vertices()).unwrap(), n, 0.3, ReplayToken { seed, index: 1 });

        let a = crossing_number_test(&pts, &closed, include);
        prop_assert_eq!(&a, &crossing_number_test(&pts, &closed, include));
        let ai = crossing_number_indices(&pts, &closed, include);
        prop_assert!(is_subsequence(&a, &ai, &pts));

        let b = winding_number_test(&pts, &cyc);
        prop_assert_eq!(&b, &winding_number_test(&pts, &cyc));
        let bi = winding_number_indices(&pts, &cyc);
        prop_assert!(is_subsequence(&b, &bi, &pts));
    }

    #[test]
    fn extent_filter_never_drops_accepted_points(seed in any::<u64>(), n in 0usize..80) {
        let cyc = draw_ring_radial(star_cfg(), ReplayToken { seed, index: 2 }).unwrap();
        let closed = cyc.to_closed();
        let pts = draw_points(Extent::of(cyc.vertices()).unwrap(), n, 0.5, ReplayToken { seed, index: 3 });
        let kept: Vec<usize> = extent_filter(&pts, closed.vertices()).into_iter().map(|(i, _)| i).collect();
        for include in [true, false] {
            for i in crossing_number_indices(&pts, &closed, include) {
                prop_assert!(kept.contains(&i));
            }
        }
        // Single-point decisions without the prefilter agree with the batch.
        let unfiltered: Vec<usize> = (0..pts.len()).filter(|&i| crossing_contains(pts[i], &closed, true)).collect();
        prop_assert_eq!(unfiltered, crossing_number_indices(&pts, &closed, true));
    }

    #[test]
    fn winding_and_crossing_agree_on_convex_rings(seed in any::<u64>(), n in 1usize..80) {
        let cyc = draw_convex_ring(star_cfg(), ReplayToken { seed, index: 4 }).unwrap();
        let closed = cyc.to_closed();
        let pts = draw_points(Extent::of(cyc.vertices()).unwrap(), n, 0.3, ReplayToken { seed, index: 5 });
        let off_edge: Vec<_> = pts.into_iter().filter(|p| !on_boundary(*p, cyc.edges())).collect();
        prop_assert_eq!(
            crossing_number_test(&off_edge, &closed, true),
            winding_number_test(&off_edge, &cyc)
        );
    }

    #[test]
    fn winding_and_crossing_agree_on_star_rings(seed in any::<u64>(), n in 1usize..80) {
        let cyc = draw_ring_radial(star_cfg(), ReplayToken { seed, index: 6 }).unwrap();
        let closed = cyc.to_closed();
        let pts = draw_points(Extent::of(cyc.vertices()).unwrap(), n, 0.3, ReplayToken { seed, index: 7 });
        prop_assert_eq!(
            crossing_number_indices(&pts, &closed, true),
            winding_number_indices(&pts, &cyc)
        );
    }

    #[test]
    fn winding_and_crossing_agree_on_integer_grids(
        verts in prop::collection::vec((-6i32..=6, -6i32..=6), 3..12),
        reverse in any::<bool>(),
    ) {
        let pts: Vec<Vector2<f64>> = verts.iter().map(|&(x, y)| vector![x as f64, y as f64]).collect();
        let hull = convex_hull(&pts);
        prop_assume!(hull.is_some());
        let mut cyc = CyclicRing::new(hull.unwrap()).unwrap();
        if reverse {
            cyc = cyc.reversed();
        }
        let closed = cyc.to_closed();
        // Half-integer grid: every query shares coordinates with vertices or edge midpoints.
        let grid: Vec<Vector2<f64>> = (-14..=14)
            .flat_map(|i| (-14..=14).map(move |j| vector![i as f64 / 2.0, j as f64 / 2.0]))
            .filter(|p| !on_boundary(*p, cyc.edges()))
            .collect();
        prop_assert_eq!(
            crossing_number_indices(&grid, &closed, true),
            winding_number_indices(&grid, &cyc)
        );
    }

    #[test]
    fn results_ignore_ring_orientation(seed in any::<u64>(), n in 1usize..60) {
        let cyc = draw_ring_radial(star_cfg(), ReplayToken { seed, index: 8 }).unwrap();
        let rev = cyc.reversed();
        let pts = draw_points(Extent::of(cyc.vertices()).unwrap(), n, 0.3, ReplayToken { seed, index: 9 });
        prop_assert_eq!(winding_number_indices(&pts, &cyc), winding_number_indices(&pts, &rev));
        prop_assert_eq!(
            crossing_number_indices(&pts, &cyc.to_closed(), true),
            crossing_number_indices(&pts, &rev.to_closed(), true)
        );
    }

    #[test]
    fn ring_vertices_follow_boundary_rules(seed in any::<u64>()) {
        let cyc = draw_ring_radial(star_cfg(), ReplayToken { seed, index: 10 }).unwrap();
        let closed = cyc.to_closed();
        for v in cyc.vertices() {
            prop_assert!(crossing_contains(*v, &closed, true));
            prop_assert!(!crossing_contains(*v, &closed, false));
            prop_assert!(!winding_contains(*v, &cyc));
        }
    }
}
