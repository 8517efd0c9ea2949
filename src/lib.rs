//! Reconstructs the logical structure of a chemical reaction from a 2D
//! sketch layout.
//!
//! A reaction sketch is a bag of unconnected marks: molecular fragments,
//! `+` signs, and arrows, each at some canvas position. Nothing in the
//! document says which fragments react and which are produced, or how a
//! multi-step pathway chains together. This crate infers that from
//! geometry alone, deterministically; no chemistry is involved beyond
//! fragment connectivity.
//!
//! ```
//! use sketchrxn::{reconstruct_reaction, Atom, Bond, Mol, Role, Sketch};
//! use sketchrxn::sketch::{ArrowKind, ArrowMeta, MetaObject, PlusMeta};
//!
//! // Four two-atom fragments: A + B -> C -> D.
//! let mut structure: Mol<Atom, Bond> = Mol::new();
//! for x in [0.0, 3.0, 10.0, 18.0] {
//!     let lo = structure.add_atom(Atom::at(6, [x, -0.5]));
//!     let hi = structure.add_atom(Atom::at(8, [x + 1.0, 0.5]));
//!     structure.add_bond(lo, hi, Bond::default());
//! }
//! let arrow = |begin: f64, end: f64| {
//!     MetaObject::Arrow(ArrowMeta {
//!         kind: ArrowKind::Plain,
//!         begin: [begin, 0.0],
//!         end: [end, 0.0],
//!     })
//! };
//! let meta = vec![
//!     MetaObject::Plus(PlusMeta { pos: [2.0, 0.0] }),
//!     arrow(5.0, 8.0),
//!     arrow(13.0, 16.0),
//! ];
//! let rxn = reconstruct_reaction(&Sketch::reaction(structure, meta))?;
//!
//! // A and B join into one reactant block; C heads the first arrow and
//! // tails the second, so it is an intermediate; D is the product.
//! assert_eq!(rxn.reactants.len(), 2);
//! assert_eq!(rxn.intermediates.len(), 1);
//! assert_eq!(rxn.products.len(), 1);
//! assert_eq!(rxn.blocks.iter().filter(|b| b.role == Role::Reactant).count(), 1);
//! # Ok::<(), sketchrxn::ReconstructError>(())
//! ```

pub mod atom;
pub mod bond;
pub mod fragment;
pub mod geom;
pub mod mol;
pub mod reaction;
pub mod reconstruct;
pub mod sketch;
pub mod traits;

pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use fragment::{bounding_box, decompose};
pub use geom::Rect;
pub use mol::Mol;
pub use reaction::{Reaction, ReactionBlock, ReactionSink, Role};
pub use reconstruct::{reconstruct, reconstruct_reaction, ReconstructError};
pub use sketch::{Sketch, SketchContent};
pub use traits::{HasAtomicNum, HasBondOrder, HasFormalCharge, HasPosition2D};

#[cfg(test)]
mod tests;
