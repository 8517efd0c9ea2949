//! Routing of reaction arrows to the blocks at their tail and head.
//!
//! Each arrow scans every finalized block once. A block hit by the ray
//! fired from the arrow's begin point through its end point lies on the
//! product side and is scored by its distance to the end point; otherwise,
//! a block hit by the reverse ray lies on the reactant side and is scored
//! by its distance to the begin point. The product-side test runs first,
//! so a block the arrow passes through counts as product-side only.

use crate::sketch::ArrowMeta;

use super::blocks::SummationBlock;

/// Nearest reactant-side and product-side blocks for one arrow, if both
/// exist. Distance ties keep the lower block id.
pub(crate) fn find_arrow_ends(
    arrow: &ArrowMeta,
    blocks: &[SummationBlock],
) -> Option<(usize, usize)> {
    let mut product: Option<(f64, usize)> = None;
    let mut reactant: Option<(f64, usize)> = None;
    for (id, block) in blocks.iter().enumerate() {
        if block.bbox.ray_intersects(arrow.begin, arrow.end) {
            let dist = block.bbox.point_distance(arrow.end);
            if product.map_or(true, |(best, _)| dist < best) {
                product = Some((dist, id));
            }
        } else if block.bbox.ray_intersects(arrow.end, arrow.begin) {
            let dist = block.bbox.point_distance(arrow.begin);
            if reactant.map_or(true, |(best, _)| dist < best) {
                reactant = Some((dist, id));
            }
        }
    }
    match (reactant, product) {
        (Some((_, tail)), Some((_, head))) => Some((tail, head)),
        _ => None,
    }
}

/// Apply one routed arrow: advance both roles and record the directed edge.
pub(crate) fn connect_arrow(tail: usize, head: usize, blocks: &mut [SummationBlock]) {
    blocks[head].role = blocks[head].role.matched_as_product();
    blocks[tail].role = blocks[tail].role.matched_as_reactant();
    blocks[tail].arrows_to.push(head);
}
