//! Winding-number test over an implicitly closed ring.
//!
//! Edge `i` runs `v[i-1] → v[i]` (wrapping). Upward crossings with the point
//! strictly left add one, downward crossings with the point strictly right
//! subtract one. No extent prefilter is applied.
//!
//! Unlike the crossing test there is no boundary switch: the edge holding the
//! point has orientation zero and contributes nothing, and points on an edge
//! are always reported as outside.

use nalgebra::Vector2;

use super::on_boundary;
use crate::geom2::{orientation, CyclicRing};

/// Signed winding count of `ring` around `p`.
///
/// Negative for clockwise rings, positive for counterclockwise ones.
pub fn winding_number(p: Vector2<f64>, ring: &CyclicRing) -> i32 {
    let y = p.y;
    let mut w = 0;
    for (s, e) in ring.edges() {
        if s.y <= y {
            // upward crossing
            if e.y > y && orientation(p, s, e) > 0.0 {
                w += 1;
            }
        } else if e.y <= y && orientation(p, s, e) < 0.0 {
            // downward crossing
            w -= 1;
        }
    }
    w
}

/// Single-point decision: off every edge and nonzero winding count.
pub fn winding_contains(p: Vector2<f64>, ring: &CyclicRing) -> bool {
    !on_boundary(p, ring.edges()) && winding_number(p, ring) != 0
}

/// Positions (into `points`) of the points inside `ring`, in input order.
pub fn winding_number_indices(points: &[Vector2<f64>], ring: &CyclicRing) -> Vec<usize> {
    let inside: Vec<usize> = points
        .iter()
        .enumerate()
        .filter(|(_, p)| winding_contains(**p, ring))
        .map(|(i, _)| i)
        .collect();
    tracing::debug!(
        points = points.len(),
        inside = inside.len(),
        "winding_number_test"
    );
    inside
}

/// Points inside `ring` under the winding-number rule, in input order.
pub fn winding_number_test(points: &[Vector2<f64>], ring: &CyclicRing) -> Vec<Vector2<f64>> {
    winding_number_indices(points, ring)
        .into_iter()
        .map(|i| points[i])
        .collect()
}
