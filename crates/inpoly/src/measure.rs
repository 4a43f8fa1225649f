//! Distances and path lengths over point arrays.
//!
//! Collaborators of the containment core: typical use is measuring the points
//! a tester accepted, or the perimeter of the ring itself.

use nalgebra::{DMatrix, Vector2};

/// Distance flavour for the pairwise helpers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Metric {
    #[default]
    Euclidean,
    /// Squared Euclidean distance (no square root).
    SqEuclidean,
}

impl Metric {
    #[inline]
    fn of_squared(self, d2: f64) -> f64 {
        match self {
            Metric::Euclidean => d2.sqrt(),
            Metric::SqEuclidean => d2,
        }
    }
}

/// Pairwise distances; row `i` is `a[i]`, column `j` is `b[j]`.
pub fn distance_matrix(a: &[Vector2<f64>], b: &[Vector2<f64>], metric: Metric) -> DMatrix<f64> {
    DMatrix::from_fn(a.len(), b.len(), |i, j| {
        metric.of_squared((a[i] - b[j]).norm_squared())
    })
}

/// Distance from every point to `p`.
pub fn distances_to(points: &[Vector2<f64>], p: Vector2<f64>, metric: Metric) -> Vec<f64> {
    points
        .iter()
        .map(|q| metric.of_squared((q - p).norm_squared()))
        .collect()
}

/// Total length of a polyline plus its per-segment lengths.
#[derive(Clone, Debug, PartialEq)]
pub struct PolylineLength {
    pub total: f64,
    pub segments: Vec<f64>,
}

/// Length of the polyline through `points`.
///
/// With `close`, an open polyline gets a final segment back to its first
/// vertex; an already closed one is measured as is.
///
/// None for fewer than two points: a single point has no segment, so there is
/// no length to report rather than a length of `0.0`. Only one 2D polyline is
/// measured per call; multi-part inputs are measured part by part.
pub fn polyline_length(points: &[Vector2<f64>], close: bool) -> Option<PolylineLength> {
    if points.len() < 2 {
        return None;
    }
    let mut segments: Vec<f64> = points.windows(2).map(|w| (w[1] - w[0]).norm()).collect();
    if close {
        let (first, last) = (points[0], points[points.len() - 1]);
        if first != last {
            segments.push((first - last).norm());
        }
    }
    let total = segments.iter().sum();
    Some(PolylineLength { total, segments })
}
