//! Polyline clipping.

use super::clip_segment;
use crate::bounds::Aabb2;
use crate::primitives::Polyline2;
use num_traits::Float;

/// Clips `polyline` to the closed box `aabb`.
///
/// Returns the pieces that lie inside the box, in traversal order. Each piece
/// has at least two vertices. Consecutive edges stay in one piece as long as
/// the clipped end of one is exactly the clipped start of the next.
pub fn clip_polyline<F: Float>(aabb: Aabb2<F>, polyline: &Polyline2<F>) -> Vec<Polyline2<F>> {
    let mut pieces = Vec::new();
    let mut current = Polyline2::empty();

    for edge in polyline.edges() {
        match clip_segment(aabb, edge) {
            Some(clipped) => {
                if current.is_empty() {
                    current.push(clipped.start);
                } else if current.last() != Some(clipped.start) {
                    pieces.push(std::mem::take(&mut current));
                    current.push(clipped.start);
                }
                current.push(clipped.end);
            }
            None => {
                if !current.is_empty() {
                    pieces.push(std::mem::take(&mut current));
                }
            }
        }
    }

    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
