use criterion::{criterion_group, criterion_main, Criterion, black_box};
use tttbot::board::initial_state;
use tttbot::perft::{perft, perft_parallel, tally_games};

fn bench_perft(c: &mut Criterion) {
    let b = initial_state();
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);
    group.bench_function("perft_9_serial", |ben| ben.iter(|| black_box(perft(black_box(&b), 9))));
    group.bench_function("perft_9_parallel", |ben| ben.iter(|| black_box(perft_parallel(black_box(&b), 9))));
    group.bench_function("tally_games", |ben| ben.iter(|| black_box(tally_games(black_box(&b)))));
    group.finish();
}

criterion_group!(benches, bench_perft);
criterion_main!(benches);
