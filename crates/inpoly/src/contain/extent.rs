//! Bounding-box prefilter for the crossing-number path.

use nalgebra::Vector2;

use crate::geom2::Extent;

/// Keep the points inside the ring's extent (borders inclusive), paired with
/// their positions in `points`. Order is preserved.
///
/// The extent bounds every edge, so a point rejected here can never be
/// accepted by the exact test.
pub fn extent_filter(points: &[Vector2<f64>], ring: &[Vector2<f64>]) -> Vec<(usize, Vector2<f64>)> {
    let Some(ext) = Extent::of(ring) else {
        return Vec::new();
    };
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| ext.contains(**p))
        .map(|(i, p)| (i, *p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn keeps_border_and_reports_positions() {
        let ring = [
            vector![0.0, 0.0],
            vector![0.0, 2.0],
            vector![2.0, 2.0],
            vector![2.0, 0.0],
            vector![0.0, 0.0],
        ];
        let pts = [
            vector![3.0, 1.0],
            vector![2.0, 2.0],
            vector![1.0, 1.0],
            vector![-0.1, 1.0],
            vector![0.0, 1.5],
        ];
        let kept = extent_filter(&pts, &ring);
        assert_eq!(
            kept,
            vec![
                (1, vector![2.0, 2.0]),
                (2, vector![1.0, 1.0]),
                (4, vector![0.0, 1.5]),
            ]
        );
    }

    #[test]
    fn empty_inputs() {
        assert!(extent_filter(&[], &[vector![0.0, 0.0]]).is_empty());
        assert!(extent_filter(&[vector![0.0, 0.0]], &[]).is_empty());
    }
}
