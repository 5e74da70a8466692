use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use matmul_bench::{matmul_naive_ijk, matmul_naive_ikj, multiply, random_matrix};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_naive(c: &mut Criterion) {
    let mut group = c.benchmark_group("naive_matmul");
    let mut rng = StdRng::seed_from_u64(27);

    for size in [64, 128, 256] {
        let a = random_matrix(size, &mut rng);
        let b = random_matrix(size, &mut rng);

        group.bench_with_input(BenchmarkId::new("multiply", size), &size, |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)))
        });

        group.bench_with_input(BenchmarkId::new("ijk", size), &size, |bench, &n| {
            let mut c = vec![0.0; n * n];
            bench.iter(|| matmul_naive_ijk(a.as_slice(), b.as_slice(), black_box(&mut c), n, n, n))
        });

        group.bench_with_input(BenchmarkId::new("ikj", size), &size, |bench, &n| {
            let mut c = vec![0.0; n * n];
            bench.iter(|| matmul_naive_ikj(a.as_slice(), b.as_slice(), black_box(&mut c), n, n, n))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_naive);
criterion_main!(benches);
