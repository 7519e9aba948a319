//! 2D line segment type.

use super::{Axis, Interval, Point2, Vec2};
use crate::bounds::Aabb2;
use num_traits::Float;

/// A directed line segment from `start` to `end`.
///
/// Direction matters for parametrization ([`point_at`](Self::point_at),
/// [`slope`](Self::slope)); the intersection and clipping predicates in this
/// crate do not depend on it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Displacement from `start` to `end`.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// `dy / dx`. Infinite (or NaN for a point) when the segment is vertical.
    #[inline]
    pub fn slope(self) -> F {
        let d = self.direction();
        d.y / d.x
    }

    /// `dx / dy`. Infinite (or NaN for a point) when the segment is horizontal.
    #[inline]
    pub fn inverse_slope(self) -> F {
        let d = self.direction();
        d.x / d.y
    }

    /// Projection of the segment onto `axis`.
    #[inline]
    pub fn interval(self, axis: Axis) -> Interval<F> {
        Interval::new(self.start.coord(axis), self.end.coord(axis))
    }

    /// Smallest box containing both endpoints.
    #[inline]
    pub fn bounding_box(self) -> Aabb2<F> {
        Aabb2::from_corners(self.start, self.end)
    }

    /// Returns the point at parameter `t` on the supporting line.
    ///
    /// Values outside `[0, 1]` extrapolate beyond the segment.
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Returns the point at parameter `t`, clamped to the segment.
    pub fn interpolate(self, t: F) -> Point2<F> {
        if t <= F::zero() {
            self.start
        } else if t < F::one() {
            self.point_at(t)
        } else {
            self.end
        }
    }

    /// The same segment traversed from `end` to `start`.
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Closest point on the segment to `p`, with its parameter in `[0, 1]`.
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        if len_sq <= F::zero() {
            return (self.start, F::zero());
        }

        let t = ((p - self.start).dot(v) / len_sq).max(F::zero()).min(F::one());
        (self.point_at(t), t)
    }

    /// Squared distance from `p` to the segment.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        p.distance_squared(self.closest_point(p).0)
    }

    /// Distance from `p` to the segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        self.distance_squared_to_point(p).sqrt()
    }

    /// Returns `true` if the endpoints are within `eps` of each other.
    #[inline]
    pub fn is_degenerate(self, eps: F) -> bool {
        self.start.distance_squared(self.end) <= eps * eps
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
