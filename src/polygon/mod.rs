//! Simple polygons.
//!
//! # Example
//!
//! ```
//! use planar::{Boundary, Point2, Polygon2};
//!
//! let square: Polygon2<f64> = Polygon2::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! assert_eq!(square.area(), 4.0);
//! assert!(square.contains(Point2::new(1.0, 1.0), Boundary::Open));
//! assert!(square.contains(Point2::new(2.0, 1.0), Boundary::Closed));
//! assert!(!square.contains(Point2::new(2.0, 1.0), Boundary::Open));
//! ```

mod core;

pub use self::core::Polygon2;
