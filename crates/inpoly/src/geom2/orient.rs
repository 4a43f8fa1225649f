//! Orientation predicate and the small helpers built on it.
//!
//! The predicate is plain `f64` arithmetic with no epsilon: zero means exactly
//! collinear in floating point, and the testers rely on that exactness for
//! their tie-break rules.

use nalgebra::Vector2;

use super::types::Side;

/// Signed orientation of `p` against the directed segment `s → e`.
///
/// `(e.x - s.x) * (p.y - s.y) - (e.y - s.y) * (p.x - s.x)`
///
/// Positive: `p` is left of the line through `s → e`. Negative: right.
/// Zero: collinear with the supporting line (not necessarily between `s` and `e`).
#[inline]
pub fn orientation(p: Vector2<f64>, s: Vector2<f64>, e: Vector2<f64>) -> f64 {
    (e.x - s.x) * (p.y - s.y) - (e.y - s.y) * (p.x - s.x)
}

/// `orientation` folded into a `Side`.
#[inline]
pub fn side(p: Vector2<f64>, s: Vector2<f64>, e: Vector2<f64>) -> Side {
    Side::from_orientation(orientation(p, s, e))
}

/// True iff `p` lies on the closed segment `[s, e]`.
#[inline]
pub fn on_segment(p: Vector2<f64>, s: Vector2<f64>, e: Vector2<f64>) -> bool {
    orientation(p, s, e) == 0.0
        && s.x.min(e.x) <= p.x
        && p.x <= s.x.max(e.x)
        && s.y.min(e.y) <= p.y
        && p.y <= s.y.max(e.y)
}

/// Shoelace signed area of an implicitly closed vertex cycle.
/// Positive for counterclockwise order, negative for clockwise.
pub fn signed_area(vertices: &[Vector2<f64>]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let p = vertices[i];
        let q = vertices[(i + 1) % n];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn orientation_signs() {
        let s = vector![0.0, 0.0];
        let e = vector![1.0, 1.0];
        assert!(orientation(vector![0.0, 0.5], s, e) > 0.0);
        assert_eq!(orientation(vector![0.5, 0.5], s, e), 0.0);
        assert!(orientation(vector![1.0, 0.5], s, e) < 0.0);
        // Collinear but outside the segment still reports zero.
        assert_eq!(orientation(vector![3.0, 3.0], s, e), 0.0);
        assert_eq!(side(vector![3.0, 3.0], s, e), Side::On);
        assert_eq!(side(vector![0.0, 0.5], s, e), Side::Left);
        assert_eq!(side(vector![1.0, 0.5], s, e), Side::Right);
    }

    #[test]
    fn on_segment_requires_span() {
        let s = vector![0.0, 0.0];
        let e = vector![0.0, 1.0];
        assert!(on_segment(vector![0.0, 0.5], s, e));
        assert!(on_segment(vector![0.0, 1.0], s, e));
        assert!(!on_segment(vector![0.0, 1.5], s, e));
        assert!(!on_segment(vector![0.1, 0.5], s, e));
    }

    #[test]
    fn signed_area_tracks_orientation() {
        let ccw = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        assert!((signed_area(&ccw) - 1.0).abs() < 1e-12);
        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        assert!((signed_area(&cw) + 1.0).abs() < 1e-12);
        assert_eq!(signed_area(&ccw[..2]), 0.0);
    }
}
