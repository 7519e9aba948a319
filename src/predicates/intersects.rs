//! Boolean intersection tests between segments, boxes, polylines and polygons.
//!
//! All tests are closed: shapes that only touch count as intersecting.

use super::orientation;
use crate::bounds::Aabb2;
use crate::polygon::Polygon2;
use crate::primitives::{Axis, Boundary, Polyline2, Segment2};
use num_traits::Float;

/// Returns `true` if two closed segments share at least one point.
///
/// The result does not depend on argument order or on the direction of
/// either segment.
pub fn segments_intersect<F: Float>(s1: Segment2<F>, s2: Segment2<F>) -> bool {
    let c_side = orientation(s1.start, s1.end, s2.start);
    let d_side = orientation(s1.start, s1.end, s2.end);

    if c_side == F::zero() && d_side == F::zero() {
        // All four points are collinear.
        return Axis::ALL
            .iter()
            .all(|&axis| s1.interval(axis).intersects(s2.interval(axis)));
    }

    let a_side = orientation(s2.start, s2.end, s1.start);
    let b_side = orientation(s2.start, s2.end, s1.end);
    straddles(c_side, d_side) && straddles(a_side, b_side)
}

/// Returns `true` unless both orientations are strictly on the same side.
///
/// Compares signs directly; the product of two tiny orientations underflows.
#[inline]
fn straddles<F: Float>(p: F, q: F) -> bool {
    let zero = F::zero();
    !((p > zero && q > zero) || (p < zero && q < zero))
}

/// Returns `true` if the segment touches the closed box.
pub fn segment_intersects_aabb<F: Float>(segment: Segment2<F>, aabb: Aabb2<F>) -> bool {
    if aabb.contains_point(segment.start) || aabb.contains_point(segment.end) {
        return true;
    }

    // Both endpoints are outside, so the segment must cross a diagonal.
    let rising = Segment2::new(aabb.vertex(0), aabb.vertex(3));
    let falling = Segment2::new(aabb.vertex(2), aabb.vertex(1));
    segments_intersect(segment, rising) || segments_intersect(segment, falling)
}

/// Returns `true` if any edge of the polyline touches the box.
pub fn polyline_intersects_aabb<F: Float>(polyline: &Polyline2<F>, aabb: Aabb2<F>) -> bool {
    if polyline.is_empty() {
        return false;
    }
    match polyline.bounding_box() {
        Some(bounds) if bounds.intersects(aabb) => {}
        _ => return false,
    }
    polyline
        .edges()
        .any(|edge| segment_intersects_aabb(edge, aabb))
}

/// Returns `true` if the polygon region and the box share a point.
///
/// Detects the box lying entirely inside the polygon and vice versa.
pub fn polygon_intersects_aabb<F: Float>(polygon: &Polygon2<F>, aabb: Aabb2<F>) -> bool {
    if polygon.is_degenerate() {
        return false;
    }
    match polygon.bounding_box() {
        Some(bounds) if bounds.intersects(aabb) => {}
        _ => return false,
    }

    if aabb.contains_point(polygon.vertices[0])
        || polygon.contains(aabb.vertex(0), Boundary::Closed)
    {
        return true;
    }
    polygon
        .edges()
        .any(|edge| segment_intersects_aabb(edge, aabb))
}

/// Returns `true` if the segment touches the polygon region.
pub fn polygon_intersects_segment<F: Float>(polygon: &Polygon2<F>, segment: Segment2<F>) -> bool {
    if polygon.is_degenerate() {
        return false;
    }
    match polygon.bounding_box() {
        Some(bounds) if bounds.intersects(segment.bounding_box()) => {}
        _ => return false,
    }

    if polygon.contains(segment.start, Boundary::Closed)
        || polygon.contains(segment.end, Boundary::Closed)
    {
        return true;
    }
    polygon
        .edges()
        .any(|edge| segments_intersect(segment, edge))
}

/// Returns `true` if any edge of the polyline touches the polygon region.
pub fn polygon_intersects_polyline<F: Float>(
    polygon: &Polygon2<F>,
    polyline: &Polyline2<F>,
) -> bool {
    if polygon.is_degenerate() || polyline.is_empty() {
        return false;
    }
    match (polygon.bounding_box(), polyline.bounding_box()) {
        (Some(a), Some(b)) if a.intersects(b) => {}
        _ => return false,
    }
    polyline
        .edges()
        .any(|edge| polygon_intersects_segment(polygon, edge))
}
