//! Cohen–Sutherland outcodes.

use crate::bounds::Aabb2;
use crate::primitives::Point2;
use bitflags::bitflags;
use num_traits::Float;

bitflags! {
    /// Position of a point relative to a box, one bit per violated side.
    ///
    /// The empty set means the point lies in the closed box.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    pub(crate) struct RegionCode: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const TOP = 1 << 3;
    }
}

impl RegionCode {
    /// Computes the outcode of `p` with respect to `aabb`.
    pub(crate) fn of<F: Float>(aabb: Aabb2<F>, p: Point2<F>) -> Self {
        let mut code = RegionCode::empty();
        if p.x < aabb.min.x {
            code |= RegionCode::LEFT;
        } else if aabb.max.x < p.x {
            code |= RegionCode::RIGHT;
        }
        if p.y < aabb.min.y {
            code |= RegionCode::BOTTOM;
        } else if aabb.max.y < p.y {
            code |= RegionCode::TOP;
        }
        code
    }
}
