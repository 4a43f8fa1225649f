use nalgebra::Vector2;

use super::orient::orientation;

/// Andrew's monotone chain convex hull (returns hull in CCW order, no closing vertex).
///
/// Collinear points on the hull boundary are dropped. None when fewer than
/// three non-collinear points remain.
pub fn convex_hull(points: &[Vector2<f64>]) -> Option<Vec<Vector2<f64>>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();
    if pts.len() < 3 {
        return None;
    }
    // orientation(p, a, b) > 0 means p is left of a → b, i.e. a CCW turn.
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && orientation(*p, lower[lower.len() - 2], lower[lower.len() - 1]) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && orientation(*p, upper[upper.len() - 2], upper[upper.len() - 1]) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        return None;
    }
    Some(hull)
}
