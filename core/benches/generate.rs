use criterion::{Criterion, criterion_group, criterion_main};
use memocalc_core::*;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut group = c.benchmark_group("generate");

    group.bench_function("board", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(RandomBoardGenerator::new(seed).generate())
        })
    });

    group.bench_function("problems", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(RandomProblemGenerator::new(seed).generate(&config))
        })
    });

    group.bench_function("controller_reset", |b| {
        let mut controller = RoundController::new(config, 0, ManualScheduler::new());
        b.iter(|| {
            controller.on_reset_requested();
            black_box(controller.view())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
