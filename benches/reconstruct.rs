use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sketchrxn::sketch::{ArrowKind, ArrowMeta, MetaObject, PlusMeta};
use sketchrxn::{reconstruct_reaction, Atom, Bond, Mol, Sketch};

/// Linear pathway of `steps` reactions: each step's product is the next
/// step's reactant, with a coreactant joined by a plus above each arrow gap.
fn chain_sketch(steps: usize) -> Sketch<Atom, Bond> {
    let mut structure = Mol::new();
    let mut meta = Vec::new();
    let pitch = 10.0;
    for i in 0..=steps {
        let x = i as f64 * pitch;
        let a = structure.add_atom(Atom::at(6, [x, -1.0]));
        let b = structure.add_atom(Atom::at(8, [x + 2.0, 1.0]));
        structure.add_bond(a, b, Bond::default());
    }
    for i in 0..steps {
        let x = i as f64 * pitch;
        meta.push(MetaObject::Arrow(ArrowMeta {
            kind: ArrowKind::Plain,
            begin: [x + 3.0, 0.0],
            end: [x + 9.0, 0.0],
        }));
    }
    Sketch::reaction(structure, meta)
}

/// Single-step reaction with `n` reactants summed by pluses.
fn summation_sketch(n: usize) -> Sketch<Atom, Bond> {
    let mut structure = Mol::new();
    let mut meta = Vec::new();
    for i in 0..n {
        let x = i as f64 * 6.0;
        let a = structure.add_atom(Atom::at(6, [x, -1.0]));
        let b = structure.add_atom(Atom::at(8, [x + 2.0, 1.0]));
        structure.add_bond(a, b, Bond::default());
        if i > 0 {
            meta.push(MetaObject::Plus(PlusMeta { pos: [x - 2.0, 0.0] }));
        }
    }
    let end = n as f64 * 6.0;
    let a = structure.add_atom(Atom::at(6, [end + 8.0, -1.0]));
    let b = structure.add_atom(Atom::at(8, [end + 10.0, 1.0]));
    structure.add_bond(a, b, Bond::default());
    // Second arrow far downstream keeps this on the multi-arrow path.
    meta.push(MetaObject::Arrow(ArrowMeta {
        kind: ArrowKind::Plain,
        begin: [end + 1.0, 0.0],
        end: [end + 5.0, 0.0],
    }));
    meta.push(MetaObject::Arrow(ArrowMeta {
        kind: ArrowKind::Plain,
        begin: [end + 12.0, 0.0],
        end: [end + 16.0, 0.0],
    }));
    Sketch::reaction(structure, meta)
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");
    for steps in [4, 32, 128] {
        let sketch = chain_sketch(steps);
        group.bench_function(format!("{steps}_steps"), |b| {
            b.iter(|| black_box(reconstruct_reaction(black_box(&sketch)).unwrap()))
        });
    }
    group.finish();
}

fn bench_summation(c: &mut Criterion) {
    let mut group = c.benchmark_group("summation");
    for n in [4, 32, 128] {
        let sketch = summation_sketch(n);
        group.bench_function(format!("{n}_reactants"), |b| {
            b.iter(|| black_box(reconstruct_reaction(black_box(&sketch)).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chain, bench_summation);
criterion_main!(benches);
