mod utils;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use quadtree_performance::{DirectSearch, QuadTree, Rectangle};
use utils::{get_random_points, get_random_rects, universe};

pub fn query_benchmark(c: &mut Criterion) {
    let query_rects: Vec<Rectangle> = get_random_rects(universe(), 1000, 342);
    let mut group = c.benchmark_group("query_uniform");

    for &num_points in [1_000, 10_000, 100_000].iter() {
        let points = get_random_points(universe(), num_points, 192);
        println!("Benchmarking query over {} points.", num_points);

        for &capacity in [1, 10, 100].iter() {
            let tree = QuadTree::new(&points, capacity).unwrap();
            group.bench_function(
                BenchmarkId::new(format!("quadtree_query.{}", num_points), capacity),
                |b| {
                    let mut query_iter = query_rects.iter().cycle();
                    b.iter_batched(
                        move || query_iter.next().unwrap(),
                        |probe| tree.query_rect(probe),
                        BatchSize::SmallInput,
                    )
                },
            );
        }

        let search = DirectSearch::new(points);
        group.bench_function(
            BenchmarkId::new("direct_search_query", num_points),
            |b| {
                let mut query_iter = query_rects.iter().cycle();
                b.iter_batched(
                    move || query_iter.next().unwrap(),
                    |probe| search.query(probe),
                    BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, query_benchmark);

criterion_main!(benches);
