//! 2D primitives for the containment testers.
//!
//! Purpose
//! - The orientation predicate (`orient`), the inclusive axis-aligned extent
//!   (`types::Extent`), and the two ring shapes (`ring`) the testers consume.
//! - Deterministic random rings for tests and benches (`rand`).
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`.
//! - No tolerances: predicates compare exactly in `f64`.

mod orient;
pub mod rand;
mod ring;
mod types;
mod util;

pub use orient::{on_segment, orientation, side, signed_area};
pub use ring::{ClosedRing, CyclicRing, RingError, RingOrientation};
pub use types::{Extent, Side};
pub use util::convex_hull;
