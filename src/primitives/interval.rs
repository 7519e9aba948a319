//! Closed 1D intervals, coordinate axes, and boundary conventions.

use num_traits::Float;
use std::fmt;

/// A coordinate axis of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Both axes, in order.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Whether a containment test includes the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    /// Points on the boundary are contained.
    #[default]
    Closed,
    /// Points on the boundary are not contained.
    Open,
}

impl Boundary {
    /// The opposite convention.
    #[inline]
    pub fn complement(self) -> Self {
        match self {
            Boundary::Closed => Boundary::Open,
            Boundary::Open => Boundary::Closed,
        }
    }
}

/// A closed interval `[min, max]` on the real line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<F> {
    pub min: F,
    pub max: F,
}

impl<F: Float> Interval<F> {
    /// Creates the interval spanned by `a` and `b`, in either order.
    #[inline]
    pub fn new(a: F, b: F) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn length(self) -> F {
        self.max - self.min
    }

    /// Returns `true` if the closed intervals share at least one value.
    ///
    /// Intervals touching at a single endpoint intersect.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        !(other.max < self.min || self.max < other.min)
    }

    /// Returns `true` if `x` lies in the interval.
    #[inline]
    pub fn contains(self, x: F, boundary: Boundary) -> bool {
        match boundary {
            Boundary::Closed => self.min <= x && x <= self.max,
            Boundary::Open => self.min < x && x < self.max,
        }
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[inline]
    pub fn contains_interval(self, other: Self) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}
