//! The single-arrow fast path: one sort, one linear walk.
//!
//! With exactly one arrow there is no routing ambiguity; fragments,
//! pluses, and the arrow are ordered by x and walked left to right.
//! Consecutive fragments merge into a running accumulator. Each plus
//! flushes the accumulator as one species (a reactant before the arrow,
//! a product after it) and the arrow itself flushes the last reactant.

use crate::fragment::bounding_box;
use crate::mol::Mol;
use crate::reaction::ReactionSink;
use crate::sketch::MetaObject;
use crate::traits::HasPosition2D;

enum Item {
    Fragment(usize),
    Plus,
    Arrow,
}

pub(crate) fn reconstruct_single_arrow<A, B, S>(
    fragments: &[Mol<A, B>],
    meta: &[MetaObject],
    sink: &mut S,
) where
    A: HasPosition2D + Clone,
    B: Clone,
    S: ReactionSink<Mol<A, B>>,
{
    let mut items: Vec<(f64, Item)> = Vec::with_capacity(fragments.len() + meta.len());
    for (i, frag) in fragments.iter().enumerate() {
        let x = bounding_box(frag).map_or(0.0, |bbox| bbox.left());
        items.push((x, Item::Fragment(i)));
    }
    for entry in meta {
        match entry {
            MetaObject::Arrow(arrow) => items.push((arrow.begin[0], Item::Arrow)),
            MetaObject::Plus(plus) => items.push((plus.pos[0], Item::Plus)),
            MetaObject::Text { .. } => {}
        }
    }
    // Stable on ties: equal x keeps fragment order, then meta order.
    items.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut current: Mol<A, B> = Mol::new();
    let mut arrow_passed = false;
    for (_, item) in items {
        match item {
            Item::Fragment(i) => current.merge_from(&fragments[i]),
            Item::Arrow => {
                flush(&mut current, false, sink);
                arrow_passed = true;
            }
            Item::Plus => flush(&mut current, arrow_passed, sink),
        }
    }
    flush(&mut current, true, sink);
}

/// Emit the accumulator as one species and reset it. An empty accumulator
/// (a plus with nothing before it, or nothing after the arrow) emits
/// nothing.
fn flush<A, B, S>(current: &mut Mol<A, B>, as_product: bool, sink: &mut S)
where
    S: ReactionSink<Mol<A, B>>,
{
    if current.is_empty() {
        return;
    }
    let species = std::mem::take(current);
    if as_product {
        sink.add_product_copy(species);
    } else {
        sink.add_reactant_copy(species);
    }
}
