use tictactoe::{count_games, count_positions, initial_grid};

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("count all possible positions to depth 5", |b| {
        b.iter(|| count_positions(&initial_grid(), 5))
    });
    c.bench_function("count all complete games", |b| {
        b.iter(|| count_games(&initial_grid()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
