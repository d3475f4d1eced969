use criterion::{criterion_group, criterion_main, Criterion, black_box};
use tttbot::board::{initial_state, Board};
use tttbot::search::{SearchParams, Searcher};

fn bench_search(c: &mut Criterion) {
    let empty = initial_state();
    let midgame: Board = "X../.O./..X".parse().expect("valid board");
    c.bench_function("search_startpos_ordered", |ben| {
        ben.iter(|| {
            let mut s = Searcher::new(SearchParams { seed: Some(0), shuffle_moves: false });
            let r = s.search(black_box(&empty)).expect("search");
            black_box(r.nodes)
        })
    });
    c.bench_function("search_startpos_shuffled", |ben| {
        let mut s = Searcher::with_seed(0);
        ben.iter(|| {
            let r = s.search(black_box(&empty)).expect("search");
            black_box(r.nodes)
        })
    });
    c.bench_function("search_midgame_shuffled", |ben| {
        let mut s = Searcher::with_seed(0);
        ben.iter(|| black_box(s.best_move(black_box(&midgame)).expect("search")))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
