//! Open polylines.

use super::{Point2, Segment2, Vec2};
use crate::bounds::Aabb2;
use num_traits::Float;

/// A connected chain of segments between consecutive vertices.
///
/// There is no implicit edge from the last vertex back to the first. A
/// polyline with fewer than two vertices has no edges and is considered
/// empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline2<F> {
    /// The vertices, in traversal order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polyline2<F> {
    /// Creates a polyline from its vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates a polyline with no vertices.
    #[inline]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Creates an empty polyline with room for `capacity` vertices.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(Vec::with_capacity(capacity))
    }

    /// Returns `true` if the polyline has fewer than two vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 2
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// The edge from vertex `i` to vertex `i + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `i + 1` is out of bounds.
    #[inline]
    pub fn edge(&self, i: usize) -> Segment2<F> {
        Segment2::new(self.vertices[i], self.vertices[i + 1])
    }

    /// Iterates over the edges in order.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.vertices
            .windows(2)
            .map(|pair| Segment2::new(pair[0], pair[1]))
    }

    /// Appends a vertex.
    #[inline]
    pub fn push(&mut self, vertex: Point2<F>) {
        self.vertices.push(vertex);
    }

    /// Removes all vertices.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// The final vertex, if any.
    #[inline]
    pub fn last(&self) -> Option<Point2<F>> {
        self.vertices.last().copied()
    }

    /// Total length of all edges.
    pub fn length(&self) -> F {
        self.edges().fold(F::zero(), |acc, edge| acc + edge.length())
    }

    /// Distance from `p` to the nearest edge, or infinity without edges.
    pub fn distance_to_point(&self, p: Point2<F>) -> F {
        self.edges()
            .map(|edge| edge.distance_to_point(p))
            .fold(F::infinity(), F::min)
    }

    /// Point at arc-length fraction `t` along the polyline.
    ///
    /// `t <= 0` gives the first vertex and `t >= 1` the last. Returns `None`
    /// when there are no vertices.
    pub fn interpolate(&self, t: F) -> Option<Point2<F>> {
        let first = *self.vertices.first()?;
        let last = *self.vertices.last()?;
        if t <= F::zero() {
            return Some(first);
        }
        if t >= F::one() {
            return Some(last);
        }

        let target = t * self.length();
        let mut traveled = F::zero();
        for edge in self.edges() {
            traveled = traveled + edge.length();
            if target < traveled {
                let overshoot = traveled - target;
                let point = edge
                    .direction()
                    .normalize()
                    .map_or(edge.end, |dir| edge.end - dir * overshoot);
                return Some(point);
            }
        }
        Some(last)
    }

    /// Bounding box of the vertices, or `None` without vertices.
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        Aabb2::from_points(self.vertices.iter().copied())
    }

    /// The same polyline traversed in the opposite direction.
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

impl<F: Float> Default for Polyline2<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polyline2<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

impl<F: Float> FromIterator<Point2<F>> for Polyline2<F> {
    fn from_iter<I: IntoIterator<Item = Point2<F>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
