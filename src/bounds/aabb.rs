//! Axis-aligned bounding box.

use crate::error::GeomError;
use crate::primitives::{Axis, Interval, Point2, Vec2};
use num_traits::Float;

/// A 2D axis-aligned box, closed on all sides.
///
/// Valid boxes satisfy `min.x <= max.x` and `min.y <= max.y`. The clipping
/// algorithms assume this holds; use [`Aabb2::try_new`] when the corners come
/// from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a box from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates a box from min and max corners, checking the box invariant.
    pub fn try_new(min: Point2<F>, max: Point2<F>) -> Result<Self, GeomError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GeomError::NonFinite);
        }
        for axis in Axis::ALL {
            if min.coord(axis) > max.coord(axis) {
                return Err(GeomError::InvertedBox { axis });
            }
        }
        Ok(Self { min, max })
    }

    /// Creates a box from two arbitrary opposite corners.
    #[inline]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a box containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest box containing every point, or `None` for no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), Self::expand_to_include))
    }

    /// Returns `true` if `min <= max` on both axes.
    ///
    /// NaN corners are never valid.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Projection of the box onto `axis`.
    #[inline]
    pub fn interval(self, axis: Axis) -> Interval<F> {
        Interval {
            min: self.min.coord(axis),
            max: self.max.coord(axis),
        }
    }

    /// Corner `i` of the box, numbered
    ///
    /// ```text
    /// 2----3
    /// |    |
    /// 0----1
    /// ```
    ///
    /// Bit 0 of `i` selects `max.x`, bit 1 selects `max.y`; higher bits are
    /// ignored.
    #[inline]
    pub fn vertex(self, i: usize) -> Point2<F> {
        let x = if i & 1 != 0 { self.max.x } else { self.min.x };
        let y = if i & 2 != 0 { self.max.y } else { self.min.y };
        Point2::new(x, y)
    }

    /// Width of the box.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Height of the box.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// The diagonal from `min` to `max`.
    #[inline]
    pub fn size(self) -> Vec2<F> {
        self.max - self.min
    }

    /// Center of the box.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Area of the box.
    #[inline]
    pub fn area(self) -> F {
        self.width() * self.height()
    }

    /// Returns a box grown to include `p`.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Smallest box containing both boxes.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        self.expand_to_include(other.min).expand_to_include(other.max)
    }

    /// The overlap of two boxes, if any.
    pub fn intersection(self, other: Self) -> Option<Self> {
        let min = Point2::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Point2::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        let overlap = Self { min, max };
        overlap.is_valid().then_some(overlap)
    }

    /// Returns `true` if `p` lies in the box or on its boundary.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns `true` if the boxes share at least one point.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| self.interval(axis).intersects(other.interval(axis)))
    }

    /// Distance from `p` to the box; zero inside.
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        let dx = (self.min.x - p.x).max(p.x - self.max.x).max(F::zero());
        let dy = (self.min.y - p.y).max(p.y - self.max.y).max(F::zero());
        (dx * dx + dy * dy).sqrt()
    }
}
