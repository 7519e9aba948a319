//! Exact geometric predicates.
//!
//! The orientation test and everything built on it evaluate the sign of a
//! floating-point cross product directly. There is no epsilon unless one is
//! asked for through [`Orientation::with_tolerance`].
//!
//! # Example
//!
//! ```
//! use planar::{segments_intersect, Point2, Segment2};
//!
//! let a = Segment2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
//! let b = Segment2::new(Point2::new(0.0, 1.0), Point2::new(1.0, 0.0));
//! assert!(segments_intersect(a, b));
//! ```

mod intersects;
mod orientation;

pub use intersects::{
    polygon_intersects_aabb, polygon_intersects_polyline, polygon_intersects_segment,
    polyline_intersects_aabb, segment_intersects_aabb, segments_intersect,
};
pub use orientation::{orientation, Orientation};
