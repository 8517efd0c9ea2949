//! Decomposition of a merged sketch structure into its drawn fragments.
//!
//! A sketch document stores every molecule on the canvas as one merged
//! graph; the drawn pieces are its connected components. `decompose` splits
//! them back apart in component order, which is the fragment numbering the
//! rest of the crate refers to.

use petgraph::graph::NodeIndex;

use crate::geom::Rect;
use crate::mol::Mol;
use crate::traits::HasPosition2D;

pub fn connected_components<A, B>(mol: &Mol<A, B>) -> Vec<Vec<NodeIndex>> {
    let n = mol.atom_count();
    let mut visited = vec![false; n];
    let mut components = Vec::new();
    for node in mol.atoms() {
        if visited[node.index()] {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if visited[current.index()] {
                continue;
            }
            visited[current.index()] = true;
            component.push(current);
            for neighbor in mol.neighbors(current) {
                if !visited[neighbor.index()] {
                    stack.push(neighbor);
                }
            }
        }
        component.sort();
        components.push(component);
    }
    components
}

/// Split `mol` into one sub-molecule per connected component.
///
/// Components are ordered by their lowest atom index, so the result is
/// stable for a given input graph.
pub fn decompose<A: Clone, B: Clone>(mol: &Mol<A, B>) -> Vec<Mol<A, B>> {
    let components = connected_components(mol);
    let mut component_of = vec![0usize; mol.atom_count()];
    let mut index_map = vec![NodeIndex::new(0); mol.atom_count()];
    let mut fragments = Vec::with_capacity(components.len());
    for (i, component) in components.iter().enumerate() {
        let mut frag = Mol::new();
        for &old_idx in component {
            component_of[old_idx.index()] = i;
            index_map[old_idx.index()] = frag.add_atom(mol.atom(old_idx).clone());
        }
        fragments.push(frag);
    }
    for edge in mol.bonds() {
        if let Some((a, b)) = mol.bond_endpoints(edge) {
            // Endpoints are in the same component by construction.
            fragments[component_of[a.index()]].add_bond(
                index_map[a.index()],
                index_map[b.index()],
                mol.bond(edge).clone(),
            );
        }
    }
    fragments
}

/// Bounding box of a fragment's positioned atoms.
///
/// Returns `None` when no atom carries a drawing position.
pub fn bounding_box<A: HasPosition2D, B>(mol: &Mol<A, B>) -> Option<Rect> {
    let mut bbox: Option<Rect> = None;
    for idx in mol.atoms() {
        if let Some(pos) = mol.atom(idx).position_2d() {
            match &mut bbox {
                Some(r) => r.extend_point(pos),
                None => bbox = Some(Rect::point(pos)),
            }
        }
    }
    bbox
}
