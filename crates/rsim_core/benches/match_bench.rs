use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rsim_core::{Match, MatchConfig, SquadConfig};

fn bench_full_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_match");
    group.sample_size(20);
    for (label, red, blue) in [
        ("1d2a_vs_2d1a", SquadConfig::new(1, 2), SquadConfig::new(2, 1)),
        ("0d3a_vs_3d0a", SquadConfig::new(0, 3), SquadConfig::new(3, 0)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &(red, blue), |b, &(red, blue)| {
            b.iter(|| {
                let config = MatchConfig::new(red, blue).with_seed(black_box(42));
                let mut m = Match::new(config).expect("valid squads");
                black_box(m.run_to_completion())
            })
        });
    }
    group.finish();
}

fn bench_single_tick(c: &mut Criterion) {
    let mut m = Match::new(MatchConfig::default().with_duration(f32::MAX)).expect("valid config");
    c.bench_function("tick", |b| b.iter(|| black_box(m.tick())));
}

criterion_group!(benches, bench_full_match, bench_single_tick);
criterion_main!(benches);
