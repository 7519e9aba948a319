//! Floating-point geometric primitives.

mod interval;
mod point2;
mod polyline2;
mod segment2;
mod vec2;

pub use interval::{Axis, Boundary, Interval};
pub use point2::Point2;
pub use polyline2::Polyline2;
pub use segment2::Segment2;
pub use vec2::Vec2;
