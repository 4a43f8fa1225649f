//! Polygon rings in the two shapes the testers consume.
//!
//! - `ClosedRing`: first vertex repeated as the last one; edges are consecutive
//!   pairs `(v[i], v[i+1])`, no modular indexing. Used by the crossing test.
//! - `CyclicRing`: closure is implicit; edge `i` runs from `v[i-1]` to `v[i]`
//!   with `v[-1] = v[n-1]`. Used by the winding test.
//!
//! The shape is carried by the type and never inferred inside a tester.
//! Preconditions are checked once here, so the testers stay check-free.
//! Self-intersection and holes are not checked.

use std::fmt;

use nalgebra::Vector2;

use super::orient::signed_area;

/// Precondition failures surfaced by ring constructors.
#[derive(Clone, Debug, PartialEq)]
pub enum RingError {
    /// Fewer than three distinct vertices.
    TooFewVertices { distinct: usize },
    /// A closed ring must repeat its first vertex as the last one.
    NotClosed,
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingError::TooFewVertices { distinct } => write!(
                f,
                "ring needs at least 3 distinct vertices, got {distinct}"
            ),
            RingError::NotClosed => write!(f, "ring is not closed (first vertex != last vertex)"),
            RingError::NonFinite { index } => {
                write!(f, "vertex {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for RingError {}

/// Traversal direction of a ring, detected from its signed area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingOrientation {
    Clockwise,
    CounterClockwise,
}

fn check_vertices(v: &[Vector2<f64>]) -> Result<(), RingError> {
    if let Some(index) = v.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(RingError::NonFinite { index });
    }
    let distinct = count_distinct(v);
    if distinct < 3 {
        return Err(RingError::TooFewVertices { distinct });
    }
    Ok(())
}

fn count_distinct(v: &[Vector2<f64>]) -> usize {
    let mut pts: Vec<_> = v.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();
    pts.len()
}

fn orientation_of(cycle: &[Vector2<f64>]) -> Option<RingOrientation> {
    let a = signed_area(cycle);
    if a > 0.0 {
        Some(RingOrientation::CounterClockwise)
    } else if a < 0.0 {
        Some(RingOrientation::Clockwise)
    } else {
        None
    }
}

/// Explicitly closed ring: `v[0] == v[n-1]`, `n - 1` edges.
#[derive(Clone, Debug, PartialEq)]
pub struct ClosedRing {
    v: Vec<Vector2<f64>>,
}

impl ClosedRing {
    /// Validate an already-closed vertex list.
    pub fn new(v: Vec<Vector2<f64>>) -> Result<Self, RingError> {
        check_vertices(&v)?;
        if v.first() != v.last() {
            return Err(RingError::NotClosed);
        }
        Ok(Self { v })
    }

    /// Append the first vertex when the list is open, then validate.
    pub fn close(mut v: Vec<Vector2<f64>>) -> Result<Self, RingError> {
        if let (Some(&first), Some(&last)) = (v.first(), v.last()) {
            if first != last {
                v.push(first);
            }
        }
        Self::new(v)
    }

    /// All vertices, closing duplicate included.
    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.v
    }

    /// Number of edges (`vertices().len() - 1`).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.v.len() - 1
    }

    /// Consecutive `(start, end)` pairs, each edge exactly once.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        self.v.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn orientation(&self) -> Option<RingOrientation> {
        orientation_of(&self.v[..self.v.len() - 1])
    }

    /// Same ring traversed the other way; still closed.
    pub fn reversed(&self) -> Self {
        let mut v = self.v.clone();
        v.reverse();
        Self { v }
    }

    /// Drop the closing duplicate.
    pub fn to_cyclic(&self) -> CyclicRing {
        CyclicRing {
            v: self.v[..self.v.len() - 1].to_vec(),
        }
    }
}

/// Implicitly closed ring; edge `i` is `v[i-1] → v[i]` with wraparound.
///
/// A trailing duplicate of `v[0]` is tolerated: it adds a zero-length edge
/// that never satisfies the winding crossing guards.
#[derive(Clone, Debug, PartialEq)]
pub struct CyclicRing {
    v: Vec<Vector2<f64>>,
}

impl CyclicRing {
    pub fn new(v: Vec<Vector2<f64>>) -> Result<Self, RingError> {
        check_vertices(&v)?;
        Ok(Self { v })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.v
    }

    /// Edge `i` as `(v[i-1], v[i])`, for `i = 0 .. n`.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.v.len();
        (0..n).map(move |i| (self.v[(i + n - 1) % n], self.v[i]))
    }

    pub fn orientation(&self) -> Option<RingOrientation> {
        orientation_of(&self.v)
    }

    pub fn reversed(&self) -> Self {
        let mut v = self.v.clone();
        v.reverse();
        Self { v }
    }

    /// Append the closing vertex unless it is already present.
    pub fn to_closed(&self) -> ClosedRing {
        let mut v = self.v.clone();
        if v.first() != v.last() {
            v.push(v[0]);
        }
        ClosedRing { v }
    }
}
