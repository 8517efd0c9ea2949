//! The reconstructed reaction: role-tagged fragment groups plus the
//! block-level topology of multi-step pathways.

/// Semantic role of a summation block within the reaction.
///
/// Roles start as `Undefined` and only ever advance as arrows are routed:
/// a block matched on an arrow's reactant side becomes a `Reactant`, on the
/// product side a `Product`, and a block matched on both sides of different
/// arrows becomes an `Intermediate`. A role never regresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Undefined,
    Reactant,
    Product,
    Intermediate,
    Catalyst,
}

impl Role {
    /// Role after being matched on an arrow's reactant (tail) side.
    pub(crate) fn matched_as_reactant(self) -> Role {
        match self {
            Role::Undefined => Role::Reactant,
            Role::Product => Role::Intermediate,
            other => other,
        }
    }

    /// Role after being matched on an arrow's product (head) side.
    pub(crate) fn matched_as_product(self) -> Role {
        match self {
            Role::Undefined => Role::Product,
            Role::Reactant => Role::Intermediate,
            other => other,
        }
    }
}

/// One finalized summation block, as emitted to the reaction.
///
/// `members` are fragment indexes in decomposition order; `arrows_to` are
/// the final ids of the blocks this block feeds into via reaction arrows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionBlock {
    pub role: Role,
    pub members: Vec<usize>,
    pub arrows_to: Vec<usize>,
}

/// Where the reconstruction writes its result.
///
/// One "add copy" operation per role, plus the block records that carry the
/// pathway topology. The reconstruction algorithm is generic over this
/// trait, so the same code serves plain reactions, query reactions, and any
/// downstream consumer (serializers, renderers) without inspecting which
/// one it is writing to.
pub trait ReactionSink<M> {
    fn add_reactant_copy(&mut self, fragment: M);
    fn add_product_copy(&mut self, fragment: M);
    fn add_intermediate_copy(&mut self, fragment: M);
    fn add_undefined_copy(&mut self, fragment: M);
    fn add_catalyst_copy(&mut self, fragment: M);
    fn add_block(&mut self, block: ReactionBlock);

    /// Route one fragment copy to the group for `role`.
    fn add_copy(&mut self, role: Role, fragment: M) {
        match role {
            Role::Reactant => self.add_reactant_copy(fragment),
            Role::Product => self.add_product_copy(fragment),
            Role::Intermediate => self.add_intermediate_copy(fragment),
            Role::Undefined => self.add_undefined_copy(fragment),
            Role::Catalyst => self.add_catalyst_copy(fragment),
        }
    }
}

/// Concrete reaction aggregate: one fragment vector per role, plus blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction<M> {
    pub reactants: Vec<M>,
    pub products: Vec<M>,
    pub intermediates: Vec<M>,
    pub undefined: Vec<M>,
    pub catalysts: Vec<M>,
    pub blocks: Vec<ReactionBlock>,
}

impl<M> Reaction<M> {
    pub fn new() -> Self {
        Self {
            reactants: Vec::new(),
            products: Vec::new(),
            intermediates: Vec::new(),
            undefined: Vec::new(),
            catalysts: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Total number of fragment copies across all role groups.
    pub fn fragment_count(&self) -> usize {
        self.reactants.len()
            + self.products.len()
            + self.intermediates.len()
            + self.undefined.len()
            + self.catalysts.len()
    }
}

impl<M> Default for Reaction<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> ReactionSink<M> for Reaction<M> {
    fn add_reactant_copy(&mut self, fragment: M) {
        self.reactants.push(fragment);
    }

    fn add_product_copy(&mut self, fragment: M) {
        self.products.push(fragment);
    }

    fn add_intermediate_copy(&mut self, fragment: M) {
        self.intermediates.push(fragment);
    }

    fn add_undefined_copy(&mut self, fragment: M) {
        self.undefined.push(fragment);
    }

    fn add_catalyst_copy(&mut self, fragment: M) {
        self.catalysts.push(fragment);
    }

    fn add_block(&mut self, block: ReactionBlock) {
        self.blocks.push(block);
    }
}
