//! Convex hulls of point sets.
//!
//! # Example
//!
//! ```
//! use planar::{convex_hull, Point2};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(1.0, 1.0), // on the hull boundary, dropped
//! ];
//!
//! let hull = convex_hull(&points);
//! assert_eq!(
//!     hull.vertices,
//!     vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), Point2::new(2.0, 2.0)]
//! );
//! ```

use crate::polygon::Polygon2;
use crate::predicates::orientation;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull of `points` with Andrew's monotone chain.
///
/// The hull is returned counter-clockwise, starting at the point with the
/// smallest x (smallest y among ties). Only strict corners are kept, so
/// collinear boundary points and duplicates are dropped.
///
/// Small inputs are returned as-is rather than as a proper polygon:
/// - no points gives an empty polygon,
/// - one point, or two equal points, gives that single point,
/// - two distinct points are returned in input order,
/// - input with fewer than three distinct points gives those points sorted,
/// - collinear input gives its two extreme points.
///
/// # Complexity
///
/// O(n log n) time, O(n) space.
pub fn convex_hull<F: Float>(points: &[Point2<F>]) -> Polygon2<F> {
    match points {
        [] => return Polygon2::empty(),
        [p] => return Polygon2::new(vec![*p]),
        [a, b] if a == b => return Polygon2::new(vec![*a]),
        [a, b] => return Polygon2::new(vec![*a, *b]),
        _ => {}
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });
    sorted.dedup();
    if sorted.len() < 3 {
        return Polygon2::new(sorted);
    }

    // Both chains run from the leftmost to the rightmost point. The lower one
    // only turns left, the upper one only turns right.
    let mut lower: Vec<Point2<F>> = Vec::with_capacity(sorted.len());
    let mut upper: Vec<Point2<F>> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        while lower.len() >= 2
            && orientation(lower[lower.len() - 2], lower[lower.len() - 1], p) <= F::zero()
        {
            lower.pop();
        }
        lower.push(p);

        while upper.len() >= 2
            && orientation(upper[upper.len() - 2], upper[upper.len() - 1], p) >= F::zero()
        {
            upper.pop();
        }
        upper.push(p);
    }

    // The chains share their endpoints.
    if upper.len() > 2 {
        lower.extend(upper[1..upper.len() - 1].iter().rev());
    }

    log::trace!(
        "convex hull of {} points has {} vertices",
        points.len(),
        lower.len()
    );
    Polygon2::new(lower)
}

/// Computes the convex hull of a polygon's vertices.
#[inline]
pub fn polygon_convex_hull<F: Float>(polygon: &Polygon2<F>) -> Polygon2<F> {
    convex_hull(&polygon.vertices)
}
