#[macro_use]
extern crate criterion;
extern crate multiway_btree;

use criterion::{BenchmarkId, Criterion};
use multiway_btree::key_generator::{RandomGenerator, SequentialGenerator, SequentialOrder};
use multiway_btree::BTree;

const NUM: usize = 100_000;

fn load<I: Iterator<Item = u64>>(order: usize, keys: I) -> BTree<u64> {
    let mut tree = BTree::with_order(order).unwrap();
    tree.extend(keys);
    tree
}

pub fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let orders: Vec<usize> = vec![3, 5, 16, 64];
    for order in orders {
        group.bench_with_input(BenchmarkId::new("Ascending", order), &order, |b, &order| {
            b.iter(|| load(order, SequentialGenerator::new(0, NUM, SequentialOrder::Ascending)))
        });
        group.bench_with_input(BenchmarkId::new("Descending", order), &order, |b, &order| {
            b.iter(|| load(order, SequentialGenerator::new(0, NUM, SequentialOrder::Descending)))
        });
        group.bench_with_input(BenchmarkId::new("Random", order), &order, |b, &order| {
            b.iter(|| load(order, RandomGenerator::new(NUM, NUM as u64, 17)))
        });
    }
}

pub fn search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let orders: Vec<usize> = vec![3, 5, 16, 64];
    for order in orders {
        let tree = load(order, RandomGenerator::new(NUM, 2 * NUM as u64, 17));
        group.bench_with_input(BenchmarkId::new("Random", order), &tree, |b, tree| {
            b.iter(|| {
                RandomGenerator::new(1_000, 2 * NUM as u64, 42)
                    .filter(|key| tree.search(key))
                    .count()
            })
        });
    }
}

pub fn traverse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    let tree = load(16, RandomGenerator::new(NUM, NUM as u64, 17));
    group.bench_function("Recursive", |b| b.iter(|| tree.traverse().len()));
    group.bench_function("Iterator", |b| b.iter(|| tree.iter().count()));
}

criterion_group!(benches, insert_benchmark, search_benchmark, traverse_benchmark);
criterion_main!(benches);
