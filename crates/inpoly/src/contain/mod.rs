//! Point-in-polygon containment: crossing-number and winding-number tests.
//!
//! Purpose
//! - Decide which points of a batch lie inside one simple polygon ring.
//! - Two independent entry points with different ring shapes and boundary
//!   semantics:
//!   - `crossing_number_test(points, &ClosedRing, include_boundary)`: extent
//!     prefilter, then crossing parity. Edge points follow `include_boundary`.
//!   - `winding_number_test(points, &CyclicRing)`: no prefilter, nonzero
//!     winding count. Edge points are always outside.
//!
//! Both return an order-preserving subsequence of the input; `*_indices`
//! variants report positions instead. Points are evaluated independently, so
//! callers may split a batch across threads freely.

mod crossing;
mod extent;
mod winding;

pub use crossing::{crossing_contains, crossing_number, crossing_number_indices, crossing_number_test};
pub use extent::extent_filter;
pub use winding::{winding_contains, winding_number, winding_number_indices, winding_number_test};

use nalgebra::Vector2;

use crate::geom2::on_segment;

/// True iff `p` lies exactly on one of `edges`.
pub(crate) fn on_boundary<I>(p: Vector2<f64>, edges: I) -> bool
where
    I: IntoIterator<Item = (Vector2<f64>, Vector2<f64>)>,
{
    edges.into_iter().any(|(s, e)| on_segment(p, s, e))
}

#[cfg(test)]
mod tests;
