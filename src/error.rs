//! Error types for planar operations.

use crate::primitives::Axis;
use thiserror::Error;

/// Errors raised when constructing geometry that violates an invariant.
///
/// The algorithms themselves are total; these only come from the checked
/// constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A box's minimum corner exceeds its maximum corner.
    #[error("inverted box: min exceeds max along the {axis} axis")]
    InvertedBox {
        /// The offending axis.
        axis: Axis,
    },

    /// A coordinate is NaN or infinite.
    #[error("coordinate is not finite")]
    NonFinite,
}
