use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use verbclad::identifier::ClassId;
use verbclad::index::Index;
use verbclad::parsed::{ParsedClass, ParsedMember};
use verbclad::restriction::{Logic, Restriction, RestrictionTree, resolve};

// ------------- Restriction trees -------------
fn disjunction(labels: &[&str]) -> RestrictionTree {
    RestrictionTree::new(
        Logic::Or,
        labels.iter().map(|l| Restriction::including(l)).collect(),
        Vec::new(),
    )
}

fn deep_tree() -> RestrictionTree {
    // AND over four disjunctions of three, 81 paths
    RestrictionTree::new(
        Logic::And,
        vec![Restriction::excluding("region")],
        vec![
            disjunction(&["animate", "organization", "machine"]),
            disjunction(&["concrete", "abstract", "solid"]),
            disjunction(&["location", "place", "area"]),
            disjunction(&["plural", "mass", "count"]),
        ],
    )
}

// ------------- Resource -------------
fn synthetic_forest(roots: u32, subclasses: u32, members: u32) -> Vec<ParsedClass> {
    let mut forest = Vec::new();
    for r in 0..roots {
        let mut root = ParsedClass::new(ClassId::from_parts(Some(format!("root{}", r)), vec![r + 1, 1], Vec::new()).expect("valid id"));
        for m in 0..members {
            let mut member = ParsedMember::new(&format!("verb{}", (r * members + m) % 500));
            member.wn.push(format!("verb{}%2:30:{:02}", m, r % 100));
            root.members.push(member);
        }
        for s in 0..subclasses {
            let mut subclass = ParsedClass::new(ClassId::from_parts(None, vec![r + 1, 1], vec![s + 1]).expect("valid id"));
            subclass.members.push(ParsedMember::new(&format!("verb{}", s)));
            root.subclasses.push(subclass);
        }
        forest.push(root);
    }
    forest
}

fn resolve_benchmark(c: &mut Criterion) {
    let tree = deep_tree();
    c.bench_function("resolve 81 paths", |b| b.iter(|| resolve(black_box(&tree))));
}

fn index_benchmark(c: &mut Criterion) {
    let forest = synthetic_forest(300, 3, 10);
    c.bench_function("build index 1200 classes", |b| {
        b.iter(|| Index::build(black_box(forest.clone())).expect("index builds"))
    });
    let index = Index::build(forest).expect("index builds");
    c.bench_function("lookup by lemma", |b| {
        b.iter(|| index.get_by_lemma(black_box("verb42")).len())
    });
    c.bench_function("lookup by id", |b| {
        b.iter(|| index.get_by_id(black_box("root41-42.1")).is_ok())
    });
}

criterion_group!(benches, resolve_benchmark, index_benchmark);
criterion_main!(benches);
