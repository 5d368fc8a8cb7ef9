use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use avl_balanced_tree::BalancedTree;

const N: usize = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("tree_insert", |b| {
        b.iter(|| {
            let mut tree = BalancedTree::new();
            for value in &values {
                tree.insert(*value);
            }
            tree
        })
    });

    c.bench_function("tree_insert_sorted", |b| {
        b.iter(|| {
            let mut tree = BalancedTree::new();
            for value in 0..N as i32 {
                tree.insert(value);
            }
            tree
        })
    });

    let tree: BalancedTree = values.iter().copied().collect();

    c.bench_function("tree_search", |b| {
        b.iter(|| {
            for value in &values {
                black_box(tree.search(*value));
            }
        })
    });

    c.bench_function("tree_in_order", |b| {
        b.iter(|| {
            for key in &tree {
                black_box(key);
            }
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
