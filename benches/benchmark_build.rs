mod utils;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use quadtree_performance::{DirectSearch, QuadTree};
use utils::{get_random_points, universe};

pub fn construction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_uniform");

    for &num_points in [1_000, 10_000, 100_000].iter() {
        let points = get_random_points(universe(), num_points, 177);
        println!("Benchmarking build over {} points.", num_points);
        for &capacity in [1, 10, 100].iter() {
            group.bench_with_input(
                BenchmarkId::new(format!("quadtree_build.{}", num_points), capacity),
                &capacity,
                |b, &cap| {
                    b.iter(|| QuadTree::new(&points, cap).unwrap());
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("direct_search_divide.{}", num_points), capacity),
                &capacity,
                |b, &cap| {
                    b.iter(|| {
                        let mut search = DirectSearch::new(points.clone());
                        search.divide(cap).unwrap();
                        search
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, construction_benchmark);
criterion_main!(benches);
