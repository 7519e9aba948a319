//! planar - 2D clipping, convex hulls and intersection predicates
//!
//! A small computational-geometry toolkit for planar graphics and GIS work:
//! Cohen–Sutherland clipping of segments and polylines against boxes, convex
//! hulls by monotone chain, and closed intersection tests built on an exact
//! orientation predicate. Everything is generic over `f32` and `f64`.
//!
//! ```
//! use planar::{clip_polyline, Aabb2, Point2, Polyline2};
//!
//! let bounds = Aabb2::new(Point2::new(10.0, 10.0), Point2::new(20.0, 20.0));
//! let path: Polyline2<f64> = Polyline2::new(vec![
//!     Point2::new(9.0, 9.0),
//!     Point2::new(21.0, 21.0),
//!     Point2::new(21.0, 11.0),
//!     Point2::new(15.0, 11.0),
//! ]);
//!
//! let pieces = clip_polyline(bounds, &path);
//! assert_eq!(pieces.len(), 2);
//! ```

pub mod bounds;
pub mod clip;
pub mod error;
pub mod hull;
pub mod polygon;
pub mod predicates;
pub mod primitives;

pub use bounds::Aabb2;
pub use clip::{clip_polyline, clip_segment};
pub use error::GeomError;
pub use hull::{convex_hull, polygon_convex_hull};
pub use polygon::Polygon2;
pub use predicates::{
    orientation, polygon_intersects_aabb, polygon_intersects_polyline, polygon_intersects_segment,
    polyline_intersects_aabb, segment_intersects_aabb, segments_intersect, Orientation,
};
pub use primitives::{Axis, Boundary, Interval, Point2, Polyline2, Segment2, Vec2};
