//! Orientation of point triples.

use crate::primitives::Point2;
use num_traits::Float;

/// Twice the signed area of the triangle `a`, `b`, `c`.
///
/// This is the z-component of `(b - a) × (c - a)`: positive when `c` lies to
/// the left of the directed line from `a` to `b`, negative when it lies to the
/// right and zero when the three points are collinear.
#[inline]
pub fn orientation<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b - a).cross(c - a)
}

/// Classified result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// `c` is left of `a -> b` (positive area).
    CounterClockwise,
    /// `c` is right of `a -> b` (negative area).
    Clockwise,
    /// The points are on one line.
    Collinear,
}

impl Orientation {
    /// Classifies the exact sign of [`orientation`].
    #[inline]
    pub fn of<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self::with_tolerance(a, b, c, F::zero())
    }

    /// Classifies [`orientation`], treating `|value| <= eps` as collinear.
    ///
    /// `eps` is compared against twice the triangle area, not a distance.
    #[inline]
    pub fn with_tolerance<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Self {
        let value = orientation(a, b, c);
        if value > eps {
            Orientation::CounterClockwise
        } else if value < -eps {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    /// The orientation of the same triple with two points swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}
