//! Point-in-polygon containment for batches of 2D points.
//!
//! Layout
//! - `geom2`: orientation predicate, extent, ring shapes, random rings.
//! - `contain`: extent prefilter plus the crossing-number and winding-number testers.
//! - `measure`, `svg`: collaborators for measuring and drawing results.
//!
//! Ring shape is explicit in the types: the crossing test takes a
//! `ClosedRing` (first vertex repeated last), the winding test a `CyclicRing`
//! (closure implied). Ring preconditions are checked once at construction.

pub mod contain;
pub mod geom2;
pub mod measure;
pub mod svg;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use contain::{crossing_number_test, winding_number_test};
pub use geom2::{ClosedRing, CyclicRing, Extent, RingError, RingOrientation};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::contain::{
        crossing_contains, crossing_number, crossing_number_indices, crossing_number_test,
        extent_filter, winding_contains, winding_number, winding_number_indices,
        winding_number_test,
    };
    pub use crate::geom2::{
        on_segment, orientation, side, signed_area, ClosedRing, CyclicRing, Extent, RingError,
        RingOrientation, Side,
    };
    pub use crate::measure::{distance_matrix, distances_to, polyline_length, Metric, PolylineLength};
    pub use crate::svg::{render_svg, render_with_points, SvgStyle};
    pub use nalgebra::Vector2 as Vec2;
}
