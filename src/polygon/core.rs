//! Closed polygon type.

use crate::bounds::Aabb2;
use crate::predicates::orientation;
use crate::primitives::{Axis, Boundary, Point2, Polyline2, Segment2, Vec2};
use num_traits::Float;

/// A polygon given by its vertices as a closed loop.
///
/// The last vertex implicitly connects back to the first. Counter-clockwise
/// vertex order gives a positive [`signed_area`](Self::signed_area).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon2<F> {
    /// The vertices, in boundary order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon2<F> {
    /// Creates a polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon with no vertices.
    #[inline]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns `true` if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` with fewer than three vertices (no enclosed area).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// The edge from vertex `i` to the next vertex, wrapping at the end.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[inline]
    pub fn edge(&self, i: usize) -> Segment2<F> {
        let n = self.vertices.len();
        Segment2::new(self.vertices[i], self.vertices[(i + 1) % n])
    }

    /// Iterates over the edges, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        (0..self.vertices.len()).map(move |i| self.edge(i))
    }

    /// Signed area by the shoelace formula; positive for CCW winding.
    pub fn signed_area(&self) -> F {
        if self.is_degenerate() {
            return F::zero();
        }
        let twice = self
            .edges()
            .fold(F::zero(), |acc, e| acc + e.start.to_vec().cross(e.end.to_vec()));
        twice / (F::one() + F::one())
    }

    /// Absolute area.
    #[inline]
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns `true` if every turn has the same direction.
    ///
    /// Collinear vertices are ignored. Degenerate polygons are not convex.
    pub fn is_convex(&self) -> bool {
        if self.is_degenerate() {
            return false;
        }

        let n = self.vertices.len();
        let mut clockwise = false;
        let mut counterclockwise = false;
        for i in 0..n {
            let turn = orientation(
                self.vertices[i],
                self.vertices[(i + 1) % n],
                self.vertices[(i + 2) % n],
            );
            clockwise |= turn < F::zero();
            counterclockwise |= turn > F::zero();
            if clockwise && counterclockwise {
                return false;
            }
        }
        true
    }

    /// Tests whether `query` lies inside the polygon.
    ///
    /// Casts a ray towards +x and counts edge crossings. Points exactly on an
    /// edge are decided by `boundary`.
    pub fn contains(&self, query: Point2<F>, boundary: Boundary) -> bool {
        if self.is_degenerate() {
            return false;
        }
        match self.bounding_box() {
            Some(bounds) if bounds.contains_point(query) => {}
            _ => return false,
        }

        let mut crossings = 0usize;
        for edge in self.edges() {
            if edge.distance_squared_to_point(query) == F::zero() {
                return boundary == Boundary::Closed;
            }
            if (edge.start.y > query.y) == (edge.end.y > query.y) {
                continue;
            }

            let xs = edge.interval(Axis::X);
            if query.x < xs.min {
                crossings += 1;
            } else if query.x <= xs.max {
                let x = if edge.start.x == edge.end.x {
                    edge.start.x
                } else {
                    edge.start.x + (query.y - edge.start.y) * edge.inverse_slope()
                };
                if query.x < x {
                    crossings += 1;
                }
            }
        }
        crossings % 2 == 1
    }

    /// Distance to the boundary, negative for points strictly inside.
    pub fn signed_distance_to_point(&self, query: Point2<F>) -> F {
        let dist = self
            .edges()
            .map(|e| e.distance_to_point(query))
            .fold(F::infinity(), F::min);
        if dist == F::zero() {
            return dist;
        }
        if self.contains(query, Boundary::Open) {
            -dist
        } else {
            dist
        }
    }

    /// Distance to the boundary.
    #[inline]
    pub fn distance_to_point(&self, query: Point2<F>) -> F {
        self.signed_distance_to_point(query).abs()
    }

    /// The boundary as a polyline, optionally repeating the first vertex at
    /// the end.
    pub fn boundary(&self, close: bool) -> Polyline2<F> {
        let mut polyline = Polyline2::new(self.vertices.clone());
        if close {
            if let Some(&first) = self.vertices.first() {
                polyline.push(first);
            }
        }
        polyline
    }

    /// Bounding box of the vertices, or `None` without vertices.
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        Aabb2::from_points(self.vertices.iter().copied())
    }

    /// The same polygon with opposite winding.
    pub fn reversed(&self) -> Self {
        Self::new(self.vertices.iter().rev().copied().collect())
    }

    /// A copy moved by `delta`.
    pub fn translated(&self, delta: Vec2<F>) -> Self {
        Self::new(self.vertices.iter().map(|&v| v + delta).collect())
    }

    /// A copy scaled about the origin.
    pub fn scaled(&self, scalar: F) -> Self {
        Self::new(self.vertices.iter().map(|&v| v * scalar).collect())
    }
}

impl<F: Float> Default for Polygon2<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon2<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}
