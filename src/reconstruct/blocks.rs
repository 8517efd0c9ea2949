//! Summation blocks: groups of fragments joined by plus marks into one
//! chemical species.
//!
//! Blocks live in an arena and are addressed by index; merging two blocks
//! transfers the absorbed block's members and rewrites their back
//! references, leaving a retired husk behind so ids stay stable while
//! pluses are processed. Finalization compacts retired slots away,
//! promotes never-joined fragments to singleton blocks, and assigns the
//! sequential ids the arrow pass and the output records use.

use crate::geom::Rect;
use crate::reaction::Role;

use super::{Component, Membership};

/// One finalized summation block.
#[derive(Debug, Clone)]
pub(crate) struct SummationBlock {
    pub role: Role,
    pub bbox: Rect,
    pub members: Vec<usize>,
    pub arrows_to: Vec<usize>,
}

struct WorkBlock {
    bbox: Rect,
    members: Vec<usize>,
    retired: bool,
}

pub(crate) struct BlockArena {
    blocks: Vec<WorkBlock>,
}

impl BlockArena {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Join two fragment components that a resolved plus connects.
    pub fn join(&mut self, a: usize, b: usize, components: &mut [Component]) {
        match (components[a].membership, components[b].membership) {
            (Membership::Block(x), Membership::Block(y)) => {
                if x != y {
                    self.merge(x, y, components);
                }
            }
            (Membership::Block(x), _) => {
                self.absorb(x, b, components);
            }
            (_, Membership::Block(y)) => {
                self.absorb(y, a, components);
            }
            _ => {
                let id = self.blocks.len();
                self.blocks.push(WorkBlock {
                    bbox: components[a].bbox.union(&components[b].bbox),
                    members: vec![a, b],
                    retired: false,
                });
                components[a].membership = Membership::Block(id);
                components[b].membership = Membership::Block(id);
            }
        }
    }

    /// Transfer every member of block `y` into block `x` and retire `y`.
    fn merge(&mut self, x: usize, y: usize, components: &mut [Component]) {
        let moved = std::mem::take(&mut self.blocks[y].members);
        let absorbed_bbox = self.blocks[y].bbox;
        self.blocks[y].retired = true;
        for &member in &moved {
            components[member].membership = Membership::Block(x);
        }
        self.blocks[x].members.extend(moved);
        self.blocks[x].bbox.extend(&absorbed_bbox);
    }

    /// Add a lone fragment component to an existing block.
    fn absorb(&mut self, x: usize, component: usize, components: &mut [Component]) {
        let bbox = components[component].bbox;
        self.blocks[x].members.push(component);
        self.blocks[x].bbox.extend(&bbox);
        components[component].membership = Membership::Block(x);
    }

    /// Compact live blocks into final sequential ids, promote unassigned
    /// fragments to singletons, and rewrite every member's membership.
    ///
    /// Fragments occupy component indexes `0..fragment_count`.
    pub fn finalize(
        self,
        components: &mut [Component],
        fragment_count: usize,
    ) -> Vec<SummationBlock> {
        let mut finalized = Vec::new();
        for block in self.blocks {
            if block.retired {
                continue;
            }
            let id = finalized.len();
            for &member in &block.members {
                components[member].membership = Membership::Block(id);
            }
            finalized.push(SummationBlock {
                role: Role::Undefined,
                bbox: block.bbox,
                members: block.members,
                arrows_to: Vec::new(),
            });
        }
        for i in 0..fragment_count {
            if matches!(components[i].membership, Membership::Unassigned) {
                let id = finalized.len();
                components[i].membership = Membership::Block(id);
                finalized.push(SummationBlock {
                    role: Role::Undefined,
                    bbox: components[i].bbox,
                    members: vec![i],
                    arrows_to: Vec::new(),
                });
            }
        }
        finalized
    }
}
