//! Property tests over randomly generated geometry.
//!
//! Coordinates are small integers so that every orientation test is exact and
//! the properties can be checked with `==`.

use planar::{
    clip_polyline, clip_segment, convex_hull, orientation, segment_intersects_aabb,
    segments_intersect, Aabb2, Boundary, Orientation, Point2, Polygon2, Polyline2, Segment2,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn gen_coord() -> impl Strategy<Value = f64> {
    (-50i32..=50).prop_map(f64::from)
}

fn gen_point() -> impl Strategy<Value = Point2<f64>> {
    (gen_coord(), gen_coord()).prop_map(|(x, y)| Point2::new(x, y))
}

fn gen_segment() -> impl Strategy<Value = Segment2<f64>> {
    (gen_point(), gen_point()).prop_map(|(a, b)| Segment2::new(a, b))
}

fn gen_box() -> impl Strategy<Value = Aabb2<f64>> {
    (gen_point(), gen_point()).prop_map(|(a, b)| Aabb2::from_corners(a, b))
}

/// Checks that the hull is convex, counter-clockwise and encloses `points`.
fn assert_valid_hull(hull: &Polygon2<f64>, points: &[Point2<f64>]) -> Result<(), TestCaseError> {
    for v in &hull.vertices {
        prop_assert!(points.contains(v), "hull vertex {v:?} is not an input point");
    }
    if hull.len() < 3 {
        return Ok(());
    }
    prop_assert!(hull.is_convex());
    prop_assert!(hull.signed_area() > 0.0);
    for edge in hull.edges() {
        for &p in points {
            prop_assert!(
                orientation(edge.start, edge.end, p) >= 0.0,
                "{p:?} is right of hull edge {edge:?}"
            );
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn proptest_orientation_antisymmetric(a in gen_point(), b in gen_point(), c in gen_point()) {
        let value = orientation(a, b, c);
        prop_assert_eq!(value, -orientation(b, a, c));
        prop_assert_eq!(value, -orientation(a, c, b));
        prop_assert_eq!(value, orientation(b, c, a));
        prop_assert_eq!(Orientation::of(a, b, c), Orientation::of(b, a, c).reversed());
    }

    #[test]
    fn proptest_segments_intersect_symmetric(s1 in gen_segment(), s2 in gen_segment()) {
        let expected = segments_intersect(s1, s2);
        for (a, b) in [
            (s1, s2),
            (s1.reversed(), s2),
            (s1, s2.reversed()),
            (s1.reversed(), s2.reversed()),
        ] {
            prop_assert_eq!(segments_intersect(a, b), expected);
            prop_assert_eq!(segments_intersect(b, a), expected);
        }
    }

    #[test]
    fn proptest_segment_intersects_itself(s in gen_segment()) {
        prop_assert!(segments_intersect(s, s));
    }

    #[test]
    fn proptest_clip_stays_inside(aabb in gen_box(), s in gen_segment()) {
        if let Some(clipped) = clip_segment(aabb, s) {
            prop_assert!(aabb.contains_point(clipped.start));
            prop_assert!(aabb.contains_point(clipped.end));
            prop_assert!(segment_intersects_aabb(s, aabb));
            prop_assert_eq!(clip_segment(aabb, clipped), Some(clipped));
        }
    }

    #[test]
    fn proptest_clip_accepts_crossing_segments(aabb in gen_box(), s in gen_segment()) {
        let inner = Aabb2::new(
            Point2::new(aabb.min.x + 0.5, aabb.min.y + 0.5),
            Point2::new(aabb.max.x - 0.5, aabb.max.y - 0.5),
        );
        // Integer coordinates keep orientation exact, so a segment that
        // misses every corner crosses the sides well away from them.
        let through_corner = (0..4).any(|i| orientation(s.start, s.end, aabb.vertex(i)) == 0.0);
        if inner.is_valid() && !through_corner && segment_intersects_aabb(s, inner) {
            let clipped = clip_segment(aabb, s);
            prop_assert!(clipped.is_some(), "{:?} crosses {:?}", s, aabb);
            prop_assert!(clip_segment(aabb, s.reversed()).is_some());
        }
    }

    #[test]
    fn proptest_clip_contained_segment_unchanged(aabb in gen_box(), t0 in 0.0..=1.0f64, t1 in 0.0..=1.0f64) {
        let a = Point2::new(
            aabb.min.x + aabb.width() * t0,
            aabb.min.y + aabb.height() * t1,
        );
        let b = Point2::new(
            aabb.min.x + aabb.width() * t1,
            aabb.min.y + aabb.height() * t0,
        );
        prop_assume!(aabb.contains_point(a) && aabb.contains_point(b));
        let s = Segment2::new(a, b);
        prop_assert_eq!(clip_segment(aabb, s), Some(s));
    }

    #[test]
    fn proptest_clip_polyline_pieces(
        aabb in gen_box(),
        vertices in proptest::collection::vec(gen_point(), 0..12),
    ) {
        let polyline = Polyline2::new(vertices);
        let pieces = clip_polyline(aabb, &polyline);
        prop_assert!(pieces.len() <= polyline.edge_count());
        for piece in &pieces {
            prop_assert!(piece.len() >= 2);
            for &v in &piece.vertices {
                prop_assert!(aabb.contains_point(v));
            }
        }
    }

    #[test]
    fn proptest_convex_hull(points in proptest::collection::vec(gen_point(), 0..40)) {
        let hull = convex_hull(&points);
        assert_valid_hull(&hull, &points)?;
        if !points.is_empty() {
            prop_assert!(!hull.is_empty());
        }
    }

    #[test]
    fn proptest_convex_hull_idempotent(points in proptest::collection::vec(gen_point(), 3..40)) {
        let hull = convex_hull(&points);
        prop_assume!(hull.len() >= 3);
        prop_assert_eq!(convex_hull(&hull.vertices), hull);
    }
}

#[test]
fn test_random_hulls_contain_inputs() {
    let mut rng = StdRng::seed_from_u64(7);
    for &count in &[10usize, 100, 500, 2000] {
        let points: Vec<Point2<f64>> = (0..count)
            .map(|_| Point2::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)))
            .collect();
        let hull = convex_hull(&points);

        assert!(hull.len() >= 3, "{count} random points gave {} vertices", hull.len());
        assert!(hull.is_convex());
        assert!(hull.signed_area() > 0.0);
        for &p in &points {
            assert!(
                hull.contains(p, Boundary::Closed) || hull.distance_to_point(p) < 1e-9,
                "{p:?} outside hull of {count} points"
            );
        }
    }
}

#[test]
fn test_random_polyline_clip_reverses() {
    let mut rng = StdRng::seed_from_u64(42);
    let aabb = Aabb2::new(Point2::new(-10.0, -10.0), Point2::new(10.0, 10.0));
    for _ in 0..50 {
        // Axis-parallel steps on an integer grid keep every clipped point exact.
        let mut p = Point2::new(0.0, 0.0);
        let mut vertices = vec![p];
        for _ in 0..20 {
            let step = f64::from(rng.gen_range(-8i32..=8));
            p = if rng.gen::<bool>() {
                Point2::new(p.x + step, p.y)
            } else {
                Point2::new(p.x, p.y + step)
            };
            vertices.push(p);
        }
        let polyline = Polyline2::new(vertices);

        let forward = clip_polyline(aabb, &polyline);
        let backward: Vec<_> = clip_polyline(aabb, &polyline.reversed())
            .iter()
            .rev()
            .map(Polyline2::reversed)
            .collect();
        assert_eq!(forward, backward);
    }
}
