use chain_opt::gen::random_dimensions;
use chain_opt::ChainOptimizer;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, SeedableRng};

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_table_build");
    for &n in &[16usize, 64, 128, 256] {
        group.bench_function(format!("matrices_{n}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_dimensions(&mut rng, n, 1..=1000)
                },
                |dims| {
                    let opt = ChainOptimizer::new(dims).unwrap();
                    criterion::black_box(opt.min_cost());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_reconstruction(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_reconstruction");
    for &n in &[64usize, 256] {
        let mut rng = StdRng::seed_from_u64(7);
        let opt = ChainOptimizer::new(random_dimensions(&mut rng, n, 1..=1000)).unwrap();
        group.bench_function(format!("matrices_{n}"), |b| {
            b.iter(|| criterion::black_box(opt.parenthesization()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_table_build, bench_reconstruction);
criterion_main!(benches);
