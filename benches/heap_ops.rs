use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use indexed_sssp::algorithm::ShortestPathAlgorithm;
use indexed_sssp::graph::generate_random;
use indexed_sssp::{Dijkstra, IndexedHeap, IndexedMinHeap};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

fn bench_add_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_heap_add_pop");
    for &size in &[1_000usize, 10_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(1);
        let values: Vec<u64> = (0..size).map(|_| rng.gen_range(0..1_000_000)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| {
                let mut heap: IndexedMinHeap<usize, u64> = IndexedHeap::with_capacity(values.len());
                for (key, &value) in values.iter().enumerate() {
                    heap.add(key, value).unwrap();
                }
                while let Ok(entry) = heap.pop() {
                    black_box(entry);
                }
            })
        });
    }
    group.finish();
}

fn bench_update_key(c: &mut Criterion) {
    let size = 10_000usize;
    let mut rng = StdRng::seed_from_u64(2);
    let updates: Vec<(usize, u64)> = (0..size)
        .map(|_| (rng.gen_range(0..size), rng.gen_range(0..1_000_000)))
        .collect();

    c.bench_function("indexed_heap_update_key", |b| {
        b.iter(|| {
            let mut heap: IndexedMinHeap<usize, u64> =
                IndexedHeap::from_entries((0..size).map(|k| (k, 500_000))).unwrap();
            for &(key, value) in &updates {
                heap.update_key(&key, value).unwrap();
            }
            black_box(heap.len())
        })
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    for &size in &[1_000usize, 10_000, 50_000] {
        let graph = generate_random(size, 4.0, 100, 3);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| Dijkstra::new().compute_shortest_paths(graph, 0).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add_pop, bench_update_key, bench_dijkstra);
criterion_main!(benches);
