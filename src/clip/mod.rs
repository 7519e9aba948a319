//! Clipping of segments and polylines against axis-aligned boxes.
//!
//! Segments are clipped with the Cohen–Sutherland algorithm. Polylines are
//! clipped edge by edge and the surviving pieces are stitched back together
//! wherever consecutive clipped edges still meet.
//!
//! # Example
//!
//! ```
//! use planar::{clip_segment, Aabb2, Point2, Segment2};
//!
//! let bounds = Aabb2::new(Point2::new(10.0, 10.0), Point2::new(20.0, 20.0));
//! let clipped = clip_segment(bounds, Segment2::from_coords(9.0, 11.0, 21.0, 11.0));
//! assert_eq!(clipped, Some(Segment2::from_coords(10.0, 11.0, 20.0, 11.0)));
//! ```

mod polyline;
mod region;
mod segment;

pub use polyline::clip_polyline;
pub use segment::{clip_segment, MAX_CLIP_ITERATIONS};
