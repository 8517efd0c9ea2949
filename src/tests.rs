use crate::*;

fn chain(xs: &[[f64; 2]]) -> Mol<Atom, Bond> {
    let mut mol = Mol::new();
    let mut prev = None;
    for &pos in xs {
        let idx = mol.add_atom(Atom::at(6, pos));
        if let Some(p) = prev {
            mol.add_bond(p, idx, Bond::default());
        }
        prev = Some(idx);
    }
    mol
}

#[test]
fn mol_add_atoms_and_bonds() {
    let mut mol = Mol::<Atom, Bond>::new();
    let c = mol.add_atom(Atom::at(6, [0.0, 0.0]));
    let o = mol.add_atom(Atom::at(8, [1.0, 0.0]));
    let bond_idx = mol.add_bond(
        c,
        o,
        Bond {
            order: BondOrder::Double,
        },
    );

    assert_eq!(mol.atom_count(), 2);
    assert_eq!(mol.bond_count(), 1);
    assert_eq!(mol.atom(c).atomic_num, 6);
    assert_eq!(mol.atom(o).atomic_num, 8);
    assert_eq!(mol.bond(bond_idx).order, BondOrder::Double);
}

#[test]
fn mol_merge_from_offsets_indexes() {
    let mut a = chain(&[[0.0, 0.0], [1.0, 0.0]]);
    let b = chain(&[[5.0, 0.0], [6.0, 0.0], [7.0, 0.0]]);
    a.merge_from(&b);
    assert_eq!(a.atom_count(), 5);
    assert_eq!(a.bond_count(), 3);
    // The merged part stays disconnected from the original part.
    assert_eq!(fragment::connected_components(&a).len(), 2);
}

#[test]
fn merge_from_empty_is_noop() {
    let mut a = chain(&[[0.0, 0.0], [1.0, 0.0]]);
    let b = Mol::<Atom, Bond>::new();
    a.merge_from(&b);
    assert_eq!(a.atom_count(), 2);
    assert_eq!(a.bond_count(), 1);
}

#[test]
fn decompose_splits_components() {
    let mut mol = chain(&[[0.0, 0.0], [1.0, 1.0]]);
    mol.merge_from(&chain(&[[5.0, 0.0]]));
    mol.merge_from(&chain(&[[8.0, 0.0], [9.0, 0.0], [9.0, 1.0]]));

    let fragments = decompose(&mol);
    assert_eq!(fragments.len(), 3);
    let counts: Vec<usize> = fragments.iter().map(|f| f.atom_count()).collect();
    assert_eq!(counts, vec![2, 1, 3]);
    let bond_counts: Vec<usize> = fragments.iter().map(|f| f.bond_count()).collect();
    assert_eq!(bond_counts, vec![1, 0, 2]);
}

#[test]
fn decompose_empty() {
    let mol = Mol::<Atom, Bond>::new();
    assert!(decompose(&mol).is_empty());
}

#[test]
fn decompose_order_follows_lowest_atom_index() {
    let mut mol = Mol::<Atom, Bond>::new();
    // Interleave atoms of two fragments: a0, b0, a1, b1.
    let a0 = mol.add_atom(Atom::at(6, [0.0, 0.0]));
    let b0 = mol.add_atom(Atom::at(6, [10.0, 0.0]));
    let a1 = mol.add_atom(Atom::at(6, [1.0, 0.0]));
    let b1 = mol.add_atom(Atom::at(6, [11.0, 0.0]));
    mol.add_bond(a0, a1, Bond::default());
    mol.add_bond(b0, b1, Bond::default());

    let fragments = decompose(&mol);
    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0].atom(petgraph::graph::NodeIndex::new(0)).position_2d, Some([0.0, 0.0]));
    assert_eq!(fragments[1].atom(petgraph::graph::NodeIndex::new(0)).position_2d, Some([10.0, 0.0]));
}

#[test]
fn bounding_box_spans_positions() {
    let mol = chain(&[[0.0, -1.0], [4.0, 1.0], [2.0, 3.0]]);
    let bbox = bounding_box(&mol).unwrap();
    assert_eq!(bbox, Rect::new([0.0, -1.0], [4.0, 3.0]));
}

#[test]
fn bounding_box_skips_unplaced_atoms() {
    let mut mol = chain(&[[0.0, 0.0], [2.0, 2.0]]);
    let floating = mol.add_atom(Atom {
        atomic_num: 1,
        formal_charge: 0,
        position_2d: None,
    });
    let anchor = petgraph::graph::NodeIndex::new(0);
    mol.add_bond(anchor, floating, Bond::default());
    assert_eq!(bounding_box(&mol), Some(Rect::new([0.0, 0.0], [2.0, 2.0])));
}

#[test]
fn bounding_box_none_without_positions() {
    let mut mol = Mol::<Atom, Bond>::new();
    mol.add_atom(Atom {
        atomic_num: 6,
        formal_charge: 0,
        position_2d: None,
    });
    assert_eq!(bounding_box(&mol), None);
}
