//! Basic 2D value types shared by the containment testers.
//!
//! - `Extent`: axis-aligned bounding rectangle (inclusive on all four sides).
//! - `Side`: classification of a point against a directed line.
//!
//! Points themselves are plain `nalgebra::Vector2<f64>`.

use nalgebra::Vector2;

/// Axis-aligned rectangle `[min.x, max.x] × [min.y, max.y]`.
///
/// Invariants:
/// - `min <= max` componentwise when built via `Extent::of`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Extent {
    #[inline]
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self { min, max }
    }

    /// Componentwise min/max over `vertices`. None for an empty slice.
    pub fn of(vertices: &[Vector2<f64>]) -> Option<Self> {
        let first = *vertices.first()?;
        let (min, max) = vertices
            .iter()
            .skip(1)
            .fold((first, first), |(lo, hi), v| (lo.inf(v), hi.sup(v)));
        Some(Self { min, max })
    }

    /// Inclusive membership: points on the rectangle's border are kept.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Grow by `margin` on every side.
    #[inline]
    pub fn expanded(&self, margin: f64) -> Self {
        let m = Vector2::new(margin, margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }
}

/// Which side of a directed line `s → e` a point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    On,
    Right,
}

impl Side {
    /// Classify the sign of an orientation value.
    #[inline]
    pub fn from_orientation(value: f64) -> Self {
        if value > 0.0 {
            Side::Left
        } else if value < 0.0 {
            Side::Right
        } else {
            Side::On
        }
    }
}
