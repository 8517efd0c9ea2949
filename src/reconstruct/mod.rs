//! Reconstruction of a reaction's logical structure from sketch layout.
//!
//! A sketch gives no links between its marks and its fragments; the only
//! signal is where things sit on the canvas. This module recovers the
//! reaction graph from that signal alone: which fragments a plus joins
//! into one species, which species each arrow connects, and the role each
//! species ends up with in the pathway.
//!
//! With a single arrow the layout is an ordinary left-to-right equation
//! and a sort suffices. With several arrows the full pipeline runs:
//! collect every fragment and mark into a component list, index their
//! bounding boxes, resolve each plus to the pair of components it joins,
//! merge joined fragments into summation blocks, route each arrow to its
//! nearest tail and head block, and emit the role-tagged copies plus the
//! block topology records.

mod arrows;
mod blocks;
mod error;
mod index;
mod plus;
mod single;

pub use error::ReconstructError;

use crate::fragment::{bounding_box, decompose};
use crate::geom::Rect;
use crate::mol::Mol;
use crate::reaction::{Reaction, ReactionBlock, ReactionSink};
use crate::sketch::{ArrowKind, ArrowMeta, MetaObject, Sketch, SketchContent};
use crate::traits::HasPosition2D;

use blocks::BlockArena;
use index::GeometryIndex;
use plus::PlusResolution;

/// Visual margin added around plus and arrow anchors when synthesizing
/// their bounding boxes, in layout units.
const MARK_MARGIN: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ComponentKind {
    Fragment,
    Plus,
    Arrow(ArrowKind),
}

/// Connectivity state of a component.
///
/// Plus and arrow marks move from `Unassigned` to `Resolved` once matched;
/// only fragments ever carry a `Block` id, and after finalization every
/// fragment carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Membership {
    Unassigned,
    Resolved,
    Block(usize),
}

pub(crate) struct Component {
    pub kind: ComponentKind,
    pub bbox: Rect,
    pub membership: Membership,
}

/// Reconstruct the reaction drawn in `sketch`, writing the result into
/// `sink`.
///
/// Fails if the sketch is not a reaction drawing or contains no arrow;
/// every other layout anomaly (a plus with no molecule neighbors, an
/// arrow pointing at nothing) is absorbed silently per the role rules.
pub fn reconstruct<A, B, S>(sketch: &Sketch<A, B>, sink: &mut S) -> Result<(), ReconstructError>
where
    A: HasPosition2D + Clone,
    B: Clone,
    S: ReactionSink<Mol<A, B>>,
{
    match sketch.content {
        SketchContent::Reaction | SketchContent::QueryReaction => {}
        content => return Err(ReconstructError::UnsupportedContent { content }),
    }
    let arrow_count = sketch.arrow_count();
    if arrow_count == 0 {
        return Err(ReconstructError::NoArrow);
    }

    let fragments = decompose(&sketch.structure);
    if arrow_count > 1 {
        reconstruct_multi_arrow(&fragments, &sketch.meta, sink);
    } else {
        single::reconstruct_single_arrow(&fragments, &sketch.meta, sink);
    }
    Ok(())
}

/// Convenience wrapper reconstructing into a fresh [`Reaction`].
pub fn reconstruct_reaction<A, B>(
    sketch: &Sketch<A, B>,
) -> Result<Reaction<Mol<A, B>>, ReconstructError>
where
    A: HasPosition2D + Clone,
    B: Clone,
{
    let mut rxn = Reaction::new();
    reconstruct(sketch, &mut rxn)?;
    Ok(rxn)
}

fn reconstruct_multi_arrow<A, B, S>(fragments: &[Mol<A, B>], meta: &[MetaObject], sink: &mut S)
where
    A: HasPosition2D + Clone,
    B: Clone,
    S: ReactionSink<Mol<A, B>>,
{
    // Component list: fragments first, then pluses, then arrows, so a
    // fragment's component index equals its decomposition index.
    let mut components: Vec<Component> = fragments
        .iter()
        .map(|frag| Component {
            kind: ComponentKind::Fragment,
            bbox: bounding_box(frag).unwrap_or(Rect::point([0.0, 0.0])),
            membership: Membership::Unassigned,
        })
        .collect();
    let fragment_count = components.len();

    let pluses: Vec<[f64; 2]> = meta
        .iter()
        .filter_map(MetaObject::as_plus)
        .map(|p| p.pos)
        .collect();
    for &pos in &pluses {
        components.push(Component {
            kind: ComponentKind::Plus,
            bbox: Rect::point(pos).grown(MARK_MARGIN),
            membership: Membership::Unassigned,
        });
    }

    let arrows: Vec<ArrowMeta> = meta
        .iter()
        .filter_map(MetaObject::as_arrow)
        .copied()
        .collect();
    for arrow in &arrows {
        components.push(Component {
            kind: ComponentKind::Arrow(arrow.kind),
            bbox: Rect::new(arrow.begin, arrow.end).grown(MARK_MARGIN),
            membership: Membership::Unassigned,
        });
    }

    let index = GeometryIndex::build(&components);

    // Resolve pluses and merge the joined fragments into blocks.
    let mut arena = BlockArena::new();
    for (i, &pos) in pluses.iter().enumerate() {
        let plus_component = fragment_count + i;
        match plus::resolve_plus(pos, &components, &index) {
            PlusResolution::Pair(a, b) => {
                components[plus_component].membership = Membership::Resolved;
                arena.join(a, b, &mut components);
            }
            PlusResolution::NonMolecule => {
                components[plus_component].membership = Membership::Resolved;
            }
            PlusResolution::NoPair => {}
        }
    }
    let mut summ_blocks = arena.finalize(&mut components, fragment_count);

    // Route arrows and advance block roles. Non-plain arrows keep their
    // place in the component list but never connect anything.
    for (i, arrow) in arrows.iter().enumerate() {
        let arrow_component = fragment_count + pluses.len() + i;
        if !matches!(
            components[arrow_component].kind,
            ComponentKind::Arrow(ArrowKind::Plain)
        ) {
            continue;
        }
        if let Some((tail, head)) = arrows::find_arrow_ends(arrow, &summ_blocks) {
            components[arrow_component].membership = Membership::Resolved;
            arrows::connect_arrow(tail, head, &mut summ_blocks);
        }
    }

    // Emit member copies block by block in id order, then the block-level
    // topology records.
    for block in &summ_blocks {
        for &member in &block.members {
            sink.add_copy(block.role, fragments[member].clone());
        }
    }
    for block in summ_blocks {
        sink.add_block(ReactionBlock {
            role: block.role,
            members: block.members,
            arrows_to: block.arrows_to,
        });
    }
}
