//! Segment clipping.

use super::region::RegionCode;
use crate::bounds::Aabb2;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Upper bound on clipping steps for one segment.
///
/// Each step moves one endpoint onto a box side, resolving one side per step.
/// An endpoint in a corner region may need two steps, so a crossing segment
/// needs at most four. Rounding can otherwise keep an endpoint oscillating
/// around a corner forever.
pub const MAX_CLIP_ITERATIONS: usize = 4;

/// Clips `segment` to the closed box `aabb`.
///
/// Returns the part of the segment inside the box, keeping its direction, or
/// `None` if the segment misses the box. Segments lying on the boundary are
/// kept. The box must satisfy `min <= max` on both axes.
pub fn clip_segment<F: Float>(aabb: Aabb2<F>, segment: Segment2<F>) -> Option<Segment2<F>> {
    debug_assert!(aabb.is_valid(), "clipping against an invalid box");

    let mut clipped = segment;
    let mut code0 = RegionCode::of(aabb, clipped.start);
    let mut code1 = RegionCode::of(aabb, clipped.end);

    for _ in 0..MAX_CLIP_ITERATIONS {
        if (code0 | code1).is_empty() {
            return Some(clipped);
        }
        if code0.intersects(code1) {
            return None;
        }

        let clip_end = code1.bits() > code0.bits();
        let code = if clip_end { code1 } else { code0 };
        let point = boundary_point(aabb, clipped, code);
        if clip_end {
            clipped.end = point;
            code1 = RegionCode::of(aabb, point);
        } else {
            clipped.start = point;
            code0 = RegionCode::of(aabb, point);
        }
    }

    if (code0 | code1).is_empty() {
        return Some(clipped);
    }
    log::trace!(
        "segment clipping did not settle after {} steps; rejecting",
        MAX_CLIP_ITERATIONS
    );
    None
}

/// Moves along `segment` to the box side named by the highest bit of `code`.
fn boundary_point<F: Float>(aabb: Aabb2<F>, segment: Segment2<F>, code: RegionCode) -> Point2<F> {
    let start = segment.start;
    if code.contains(RegionCode::TOP) {
        let x = start.x + (aabb.max.y - start.y) * segment.inverse_slope();
        Point2::new(x, aabb.max.y)
    } else if code.contains(RegionCode::BOTTOM) {
        let x = start.x + (aabb.min.y - start.y) * segment.inverse_slope();
        Point2::new(x, aabb.min.y)
    } else if code.contains(RegionCode::RIGHT) {
        let y = start.y + (aabb.max.x - start.x) * segment.slope();
        Point2::new(aabb.max.x, y)
    } else {
        let y = start.y + (aabb.min.x - start.x) * segment.slope();
        Point2::new(aabb.min.x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Aabb2<f64> {
        Aabb2::new(Point2::new(10.0, 10.0), Point2::new(20.0, 20.0))
    }

    /// Clips `input` in both directions and compares against `expected`.
    fn check(input: Segment2<f64>, expected: Option<Segment2<f64>>) {
        assert_eq!(clip_segment(bounds(), input), expected, "{input:?}");
        assert_eq!(
            clip_segment(bounds(), input.reversed()),
            expected.map(Segment2::reversed),
            "reversed {input:?}"
        );
    }

    #[test]
    fn test_segments_inside() {
        for s in [
            Segment2::from_coords(11.0, 11.0, 19.0, 19.0),
            Segment2::from_coords(11.0, 19.0, 19.0, 11.0),
            Segment2::from_coords(11.0, 11.0, 11.0, 19.0),
            Segment2::from_coords(11.0, 11.0, 19.0, 11.0),
        ] {
            check(s, Some(s));
        }
    }

    #[test]
    fn test_one_endpoint_outside() {
        check(
            Segment2::from_coords(9.0, 9.0, 11.0, 11.0),
            Some(Segment2::from_coords(10.0, 10.0, 11.0, 11.0)),
        );
        check(
            Segment2::from_coords(9.0, 10.0, 11.0, 10.0),
            Some(Segment2::from_coords(10.0, 10.0, 11.0, 10.0)),
        );
        check(
            Segment2::from_coords(15.0, 25.0, 15.0, 15.0),
            Some(Segment2::from_coords(15.0, 20.0, 15.0, 15.0)),
        );
    }

    #[test]
    fn test_both_endpoints_outside() {
        check(
            Segment2::from_coords(9.0, 11.0, 21.0, 11.0),
            Some(Segment2::from_coords(10.0, 11.0, 20.0, 11.0)),
        );
        check(
            Segment2::from_coords(11.0, 9.0, 11.0, 21.0),
            Some(Segment2::from_coords(11.0, 10.0, 11.0, 20.0)),
        );
        check(
            Segment2::from_coords(9.0, 9.0, 21.0, 21.0),
            Some(Segment2::from_coords(10.0, 10.0, 20.0, 20.0)),
        );
        check(
            Segment2::from_coords(9.0, 21.0, 21.0, 9.0),
            Some(Segment2::from_coords(10.0, 20.0, 20.0, 10.0)),
        );
    }

    #[test]
    fn test_four_clipping_steps() {
        // Each endpoint starts in a corner region and first lands in a side
        // region, so the last step is what brings the segment inside.
        let b = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        let s = Segment2::from_coords(-4.0, 11.0, 20.0, -1.0);
        let expected = Segment2::from_coords(0.0, 9.0, 10.0, 4.0);
        assert_eq!(clip_segment(b, s), Some(expected));
        assert_eq!(clip_segment(b, s.reversed()), Some(expected.reversed()));
    }

    #[test]
    fn test_rejected() {
        check(Segment2::from_coords(4.0, 15.0, 15.0, 4.0), None);
        check(Segment2::from_coords(0.0, 0.0, 5.0, 30.0), None);
        check(Segment2::from_coords(21.0, 0.0, 21.0, 30.0), None);
    }

    #[test]
    fn test_boundary_segments_kept() {
        let top = Segment2::from_coords(10.0, 20.0, 20.0, 20.0);
        check(top, Some(top));
        check(
            Segment2::from_coords(5.0, 10.0, 25.0, 10.0),
            Some(Segment2::from_coords(10.0, 10.0, 20.0, 10.0)),
        );
    }

    #[test]
    fn test_corner_touch() {
        // Touches the box only at (10, 20).
        let s = Segment2::from_coords(5.0, 15.0, 15.0, 25.0);
        assert_eq!(
            clip_segment(bounds(), s),
            Some(Segment2::from_coords(10.0, 20.0, 10.0, 20.0))
        );
    }

    #[test]
    fn test_degenerate_box() {
        let point_box = Aabb2::from_point(Point2::new(1.0, 1.0));
        let s = Segment2::from_coords(0.0, 0.0, 2.0, 2.0);
        assert_eq!(
            clip_segment(point_box, s),
            Some(Segment2::from_coords(1.0, 1.0, 1.0, 1.0))
        );
        assert_eq!(
            clip_segment(point_box, Segment2::from_coords(0.0, 0.0, 2.0, 0.0)),
            None
        );
    }

    #[test]
    fn test_f32() {
        let b = Aabb2::new(Point2::new(10.0f32, 10.0), Point2::new(20.0, 20.0));
        assert_eq!(
            clip_segment(b, Segment2::from_coords(9.0f32, 9.0, 21.0, 21.0)),
            Some(Segment2::from_coords(10.0, 10.0, 20.0, 20.0))
        );
    }
}
